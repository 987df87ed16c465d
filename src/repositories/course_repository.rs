// src/repositories/course_repository.rs

use rusqlite::{params, Row};
use std::sync::Arc;

use super::{parse_text_column, CrudRepository};
use crate::db::ConnectionPool;
use crate::domain::course::Course;
use crate::error::{AppError, AppResult};

pub trait CourseRepository: CrudRepository<Course> {}

pub struct SqliteCourseRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCourseRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_course(row: &Row) -> Result<Course, rusqlite::Error> {
        let type_course: String = row.get("type_course")?;
        let support: String = row.get("support")?;

        Ok(Course {
            num_course: Some(row.get("num_course")?),
            level: row.get("level")?,
            type_course: parse_text_column(2, &type_course)?,
            support: parse_text_column(3, &support)?,
            price: row.get("price")?,
            time_slot: row.get("time_slot")?,
        })
    }
}

impl CrudRepository<Course> for SqliteCourseRepository {
    fn save(&self, course: &Course) -> AppResult<Course> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO course (num_course, level, type_course, support, price, time_slot)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT (num_course) DO UPDATE SET
                level = excluded.level,
                type_course = excluded.type_course,
                support = excluded.support,
                price = excluded.price,
                time_slot = excluded.time_slot",
            params![
                course.num_course,
                course.level,
                course.type_course.to_string(),
                course.support.to_string(),
                course.price,
                course.time_slot,
            ],
        )?;

        let id = course.num_course.unwrap_or_else(|| conn.last_insert_rowid());
        Ok(course.clone().with_id(id))
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Course>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_course, level, type_course, support, price, time_slot
             FROM course WHERE num_course = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_course) {
            Ok(course) => Ok(Some(course)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_all(&self) -> AppResult<Vec<Course>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_course, level, type_course, support, price, time_slot
             FROM course
             ORDER BY num_course",
        )?;

        let courses = stmt
            .query_map([], Self::row_to_course)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(courses)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM course WHERE num_course = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Course", id));
        }

        Ok(())
    }
}

impl CourseRepository for SqliteCourseRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::domain::course::{Support, TypeCourse};

    #[test]
    fn test_course_round_trip() {
        let repo = SqliteCourseRepository::new(Arc::new(open_memory_database().unwrap()));

        let saved = repo
            .save(&Course::new(2, TypeCourse::CollectiveChildren, Support::Snowboard, 85.5, 3))
            .unwrap();
        let found = repo.find_by_id(saved.num_course.unwrap()).unwrap().unwrap();

        assert_eq!(found.type_course, TypeCourse::CollectiveChildren);
        assert_eq!(found.support, Support::Snowboard);
        assert_eq!(found.price, 85.5);
        assert_eq!(found, saved);
    }

    #[test]
    fn test_find_all_in_id_order() {
        let repo = SqliteCourseRepository::new(Arc::new(open_memory_database().unwrap()));
        repo.save(&Course::new(1, TypeCourse::Individual, Support::Ski, 40.0, 1)).unwrap();
        repo.save(&Course::new(3, TypeCourse::CollectiveAdult, Support::Ski, 60.0, 2)).unwrap();

        let levels: Vec<i32> = repo.find_all().unwrap().iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![1, 3]);
    }
}
