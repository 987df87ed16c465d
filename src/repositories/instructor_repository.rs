// src/repositories/instructor_repository.rs
//
// Instructors and the set of courses they teach (instructor_course).

use rusqlite::{params, Connection, Row};
use std::sync::Arc;

use super::CrudRepository;
use crate::db::ConnectionPool;
use crate::domain::instructor::Instructor;
use crate::error::{AppError, AppResult};

pub trait InstructorRepository: CrudRepository<Instructor> {}

pub struct SqliteInstructorRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteInstructorRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map the instructor columns; courses are loaded separately
    fn row_to_instructor(row: &Row) -> Result<Instructor, rusqlite::Error> {
        Ok(Instructor {
            num_instructor: Some(row.get("num_instructor")?),
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            date_of_hire: row.get("date_of_hire")?,
            courses: Vec::new(),
        })
    }

    fn load_courses(conn: &Connection, instructor_id: i64) -> AppResult<Vec<i64>> {
        let mut stmt = conn.prepare(
            "SELECT course_id FROM instructor_course
             WHERE instructor_id = ?1
             ORDER BY course_id",
        )?;

        let courses = stmt
            .query_map(params![instructor_id], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;

        Ok(courses)
    }
}

impl CrudRepository<Instructor> for SqliteInstructorRepository {
    fn save(&self, instructor: &Instructor) -> AppResult<Instructor> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO instructor (num_instructor, first_name, last_name, date_of_hire)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (num_instructor) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                date_of_hire = excluded.date_of_hire",
            params![
                instructor.num_instructor,
                instructor.first_name,
                instructor.last_name,
                instructor.date_of_hire,
            ],
        )?;
        let id = instructor
            .num_instructor
            .unwrap_or_else(|| tx.last_insert_rowid());

        tx.execute(
            "DELETE FROM instructor_course WHERE instructor_id = ?1",
            params![id],
        )?;
        for course_id in &instructor.courses {
            tx.execute(
                "INSERT INTO instructor_course (instructor_id, course_id) VALUES (?1, ?2)",
                params![id, course_id],
            )?;
        }

        tx.commit()?;
        Ok(instructor.clone().with_id(id))
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Instructor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_instructor, first_name, last_name, date_of_hire
             FROM instructor WHERE num_instructor = ?1",
        )?;

        let mut instructor = match stmt.query_row(params![id], Self::row_to_instructor) {
            Ok(instructor) => instructor,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(AppError::Database(e)),
        };
        instructor.courses = Self::load_courses(&conn, id)?;

        Ok(Some(instructor))
    }

    fn find_all(&self) -> AppResult<Vec<Instructor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_instructor, first_name, last_name, date_of_hire
             FROM instructor
             ORDER BY num_instructor",
        )?;

        let mut instructors = stmt
            .query_map([], Self::row_to_instructor)?
            .collect::<Result<Vec<_>, _>>()?;

        for instructor in &mut instructors {
            if let Some(id) = instructor.num_instructor {
                instructor.courses = Self::load_courses(&conn, id)?;
            }
        }

        Ok(instructors)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "DELETE FROM instructor WHERE num_instructor = ?1",
            params![id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Instructor", id));
        }

        Ok(())
    }
}

impl InstructorRepository for SqliteInstructorRepository {}
