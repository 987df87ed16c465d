// src/repositories/registration_repository.rs
//
// Registrations and the counting queries the admission rules read.

use rusqlite::{params, Connection, Row};
use std::sync::Arc;

use super::CrudRepository;
use crate::db::ConnectionPool;
use crate::domain::course::Support;
use crate::domain::registration::Registration;
use crate::error::{AppError, AppResult};

pub trait RegistrationRepository: CrudRepository<Registration> {
    /// Registrations already linking this (week, skier, course)
    fn count_distinct_by_week_skier_course(
        &self,
        num_week: u32,
        skier_id: i64,
        course_id: i64,
    ) -> AppResult<u32>;

    /// Registrations for a course in one week
    fn count_by_course_and_week(&self, course_id: i64, num_week: u32) -> AppResult<u32>;

    /// Distinct weeks, ascending, in which the instructor's courses on
    /// `support` have at least one registration
    fn num_weeks_course_of_instructor_by_support(
        &self,
        instructor_id: i64,
        support: Support,
    ) -> AppResult<Vec<u32>>;
}

pub struct SqliteRegistrationRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteRegistrationRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_registration(row: &Row) -> Result<Registration, rusqlite::Error> {
        Ok(Registration {
            num_registration: Some(row.get("num_registration")?),
            num_week: row.get("num_week")?,
            skier: row.get("skier_id")?,
            course: row.get("course_id")?,
        })
    }
}

/// Upsert on a caller-provided connection, so it can join a wider transaction
pub(crate) fn write_registration(conn: &Connection, registration: &Registration) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO registration (num_registration, num_week, skier_id, course_id)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (num_registration) DO UPDATE SET
            num_week = excluded.num_week,
            skier_id = excluded.skier_id,
            course_id = excluded.course_id",
        params![
            registration.num_registration,
            registration.num_week,
            registration.skier,
            registration.course,
        ],
    )?;

    Ok(registration
        .num_registration
        .unwrap_or_else(|| conn.last_insert_rowid()))
}

impl CrudRepository<Registration> for SqliteRegistrationRepository {
    fn save(&self, registration: &Registration) -> AppResult<Registration> {
        let conn = self.pool.get()?;

        let id = write_registration(&conn, registration)?;
        Ok(registration.clone().with_id(id))
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Registration>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_registration, num_week, skier_id, course_id
             FROM registration WHERE num_registration = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_registration) {
            Ok(registration) => Ok(Some(registration)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_all(&self) -> AppResult<Vec<Registration>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_registration, num_week, skier_id, course_id
             FROM registration
             ORDER BY num_registration",
        )?;

        let registrations = stmt
            .query_map([], Self::row_to_registration)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(registrations)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "DELETE FROM registration WHERE num_registration = ?1",
            params![id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Registration", id));
        }

        Ok(())
    }
}

impl RegistrationRepository for SqliteRegistrationRepository {
    fn count_distinct_by_week_skier_course(
        &self,
        num_week: u32,
        skier_id: i64,
        course_id: i64,
    ) -> AppResult<u32> {
        let conn = self.pool.get()?;

        let count: u32 = conn.query_row(
            "SELECT COUNT(DISTINCT num_registration) FROM registration
             WHERE num_week = ?1 AND skier_id = ?2 AND course_id = ?3",
            params![num_week, skier_id, course_id],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    fn count_by_course_and_week(&self, course_id: i64, num_week: u32) -> AppResult<u32> {
        let conn = self.pool.get()?;

        let count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM registration
             WHERE course_id = ?1 AND num_week = ?2",
            params![course_id, num_week],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    fn num_weeks_course_of_instructor_by_support(
        &self,
        instructor_id: i64,
        support: Support,
    ) -> AppResult<Vec<u32>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT DISTINCT r.num_week
             FROM registration r
             JOIN course c ON r.course_id = c.num_course
             JOIN instructor_course ic ON ic.course_id = c.num_course
             WHERE ic.instructor_id = ?1 AND c.support = ?2
             ORDER BY r.num_week",
        )?;

        let weeks = stmt
            .query_map(params![instructor_id, support.to_string()], |row| row.get(0))?
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::domain::course::{Course, TypeCourse};
    use crate::domain::instructor::Instructor;
    use crate::domain::skier::Skier;
    use crate::repositories::{
        SqliteCourseRepository, SqliteInstructorRepository, SqliteSkierRepository,
    };
    use chrono::NaiveDate;

    struct Fixture {
        repo: SqliteRegistrationRepository,
        courses: SqliteCourseRepository,
        skiers: SqliteSkierRepository,
        instructors: SqliteInstructorRepository,
    }

    fn fixture() -> Fixture {
        let pool = Arc::new(open_memory_database().unwrap());
        Fixture {
            repo: SqliteRegistrationRepository::new(pool.clone()),
            courses: SqliteCourseRepository::new(pool.clone()),
            skiers: SqliteSkierRepository::new(pool.clone()),
            instructors: SqliteInstructorRepository::new(pool),
        }
    }

    fn skier(f: &Fixture, last_name: &str) -> i64 {
        f.skiers
            .save(&Skier::new(
                "Test",
                last_name,
                NaiveDate::from_ymd_opt(2014, 6, 1).unwrap(),
                "Tunis",
            ))
            .unwrap()
            .num_skier
            .unwrap()
    }

    fn course(f: &Fixture, support: Support) -> i64 {
        f.courses
            .save(&Course::new(1, TypeCourse::CollectiveChildren, support, 50.0, 1))
            .unwrap()
            .num_course
            .unwrap()
    }

    fn register(f: &Fixture, week: u32, skier_id: i64, course_id: i64) -> Registration {
        let mut registration = Registration::new(week);
        registration.assign_skier(skier_id);
        registration.assign_course(course_id);
        f.repo.save(&registration).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let f = fixture();
        let skier_id = skier(&f, "One");
        let course_id = course(&f, Support::Ski);

        let saved = register(&f, 4, skier_id, course_id);
        let found = f.repo.find_by_id(saved.num_registration.unwrap()).unwrap().unwrap();

        assert_eq!(found, saved);
        assert_eq!(found.course, Some(course_id));
        assert_eq!(f.repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_counts() {
        let f = fixture();
        let course_id = course(&f, Support::Ski);
        let first = skier(&f, "One");
        let second = skier(&f, "Two");

        register(&f, 3, first, course_id);
        register(&f, 3, second, course_id);
        register(&f, 4, first, course_id);

        assert_eq!(f.repo.count_distinct_by_week_skier_course(3, first, course_id).unwrap(), 1);
        assert_eq!(f.repo.count_distinct_by_week_skier_course(5, first, course_id).unwrap(), 0);
        assert_eq!(f.repo.count_by_course_and_week(course_id, 3).unwrap(), 2);
        assert_eq!(f.repo.count_by_course_and_week(course_id, 4).unwrap(), 1);
    }

    #[test]
    fn test_duplicate_triple_is_rejected_by_store() {
        let f = fixture();
        let course_id = course(&f, Support::Ski);
        let skier_id = skier(&f, "One");
        register(&f, 3, skier_id, course_id);

        let mut again = Registration::new(3);
        again.assign_skier(skier_id);
        again.assign_course(course_id);

        assert!(matches!(f.repo.save(&again), Err(AppError::Database(_))));
    }

    #[test]
    fn test_instructor_weeks_by_support() {
        let f = fixture();
        let ski = course(&f, Support::Ski);
        let board = course(&f, Support::Snowboard);
        let skier_id = skier(&f, "One");

        let mut instructor = Instructor::new(
            "John",
            "Doe",
            NaiveDate::from_ymd_opt(2020, 12, 1).unwrap(),
        );
        instructor.assign_course(ski);
        instructor.assign_course(board);
        let instructor_id = f.instructors.save(&instructor).unwrap().num_instructor.unwrap();

        register(&f, 9, skier_id, ski);
        register(&f, 2, skier_id, ski);
        register(&f, 5, skier_id, board);

        assert_eq!(
            f.repo
                .num_weeks_course_of_instructor_by_support(instructor_id, Support::Ski)
                .unwrap(),
            vec![2, 9]
        );
        assert_eq!(
            f.repo
                .num_weeks_course_of_instructor_by_support(instructor_id, Support::Snowboard)
                .unwrap(),
            vec![5]
        );
    }

    #[test]
    fn test_delete_missing() {
        assert!(matches!(
            fixture().repo.delete_by_id(1),
            Err(AppError::NotFound { entity: "Registration", id: 1 })
        ));
    }
}
