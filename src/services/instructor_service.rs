// src/services/instructor_service.rs

use std::sync::Arc;

use super::CrudService;
use crate::domain::{Course, Entity, Instructor};
use crate::error::{AppError, AppResult};
use crate::repositories::{CourseRepository, InstructorRepository};

pub struct InstructorService {
    crud: CrudService<Instructor, dyn InstructorRepository>,
    course_repo: Arc<dyn CourseRepository>,
}

impl InstructorService {
    pub fn new(
        instructor_repo: Arc<dyn InstructorRepository>,
        course_repo: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            crud: CrudService::new(instructor_repo),
            course_repo,
        }
    }

    pub fn add_instructor(&self, instructor: &Instructor) -> AppResult<Instructor> {
        self.crud.add(instructor)
    }

    pub fn retrieve_all_instructors(&self) -> AppResult<Vec<Instructor>> {
        self.crud.retrieve_all()
    }

    pub fn update_instructor(&self, instructor: &Instructor) -> AppResult<Instructor> {
        self.crud.update(instructor)
    }

    pub fn retrieve_instructor(&self, num_instructor: i64) -> AppResult<Option<Instructor>> {
        self.crud.retrieve(num_instructor)
    }

    /// Save a new instructor already teaching `course_id`
    pub fn add_instructor_and_assign_to_course(
        &self,
        mut instructor: Instructor,
        course_id: i64,
    ) -> AppResult<Instructor> {
        self.course_repo
            .find_by_id(course_id)?
            .ok_or_else(|| AppError::not_found(Course::NAME, course_id))?;

        instructor.assign_course(course_id);
        self.crud.add(&instructor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Support, TypeCourse};
    use crate::repositories::mocks::{MockCourseRepo, MockInstructorRepo};
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn instructor() -> Instructor {
        Instructor::new("John", "Doe", NaiveDate::from_ymd_opt(2020, 12, 1).unwrap())
    }

    fn service(instructors: MockInstructorRepo, courses: MockCourseRepo) -> InstructorService {
        InstructorService::new(Arc::new(instructors), Arc::new(courses))
    }

    #[test]
    fn test_add_instructor() {
        let mut instructors = MockInstructorRepo::new();
        instructors
            .expect_save()
            .times(1)
            .returning(|i| Ok(i.clone().with_id(1)));

        let added = service(instructors, MockCourseRepo::new())
            .add_instructor(&instructor())
            .unwrap();

        assert_eq!(added.first_name, "John");
        assert_eq!(added.num_instructor, Some(1));
    }

    #[test]
    fn test_retrieve_all_instructors() {
        let mut instructors = MockInstructorRepo::new();
        instructors
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![instructor().with_id(1), instructor().with_id(2)]));

        let all = service(instructors, MockCourseRepo::new())
            .retrieve_all_instructors()
            .unwrap();

        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_update_instructor() {
        let existing = instructor().with_id(1);
        let mut renamed = existing.clone();
        renamed.last_name = "Smith".to_string();

        let mut instructors = MockInstructorRepo::new();
        instructors
            .expect_find_by_id()
            .with(eq(1))
            .returning(move |_| Ok(Some(existing.clone())));
        instructors
            .expect_save()
            .times(1)
            .returning(|i| Ok(i.clone()));

        let updated = service(instructors, MockCourseRepo::new())
            .update_instructor(&renamed)
            .unwrap();

        assert_eq!(updated.last_name, "Smith");
    }

    #[test]
    fn test_retrieve_instructor() {
        let mut instructors = MockInstructorRepo::new();
        instructors
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(instructor().with_id(1))));

        let found = service(instructors, MockCourseRepo::new())
            .retrieve_instructor(1)
            .unwrap();

        assert!(found.is_some());
    }

    #[test]
    fn test_add_and_assign_to_course() {
        let mut courses = MockCourseRepo::new();
        courses.expect_find_by_id().with(eq(7)).returning(|_| {
            Ok(Some(
                Course::new(1, TypeCourse::Individual, Support::Ski, 40.0, 1).with_id(7),
            ))
        });

        let mut instructors = MockInstructorRepo::new();
        instructors
            .expect_save()
            .withf(|i| i.courses == vec![7])
            .times(1)
            .returning(|i| Ok(i.clone().with_id(1)));

        let saved = service(instructors, courses)
            .add_instructor_and_assign_to_course(instructor(), 7)
            .unwrap();

        assert_eq!(saved.courses, vec![7]);
    }

    #[test]
    fn test_assign_to_missing_course_saves_nothing() {
        let mut courses = MockCourseRepo::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let mut instructors = MockInstructorRepo::new();
        instructors.expect_save().never();

        let result = service(instructors, courses).add_instructor_and_assign_to_course(instructor(), 7);

        assert!(matches!(
            result,
            Err(AppError::NotFound { entity: "Course", id: 7 })
        ));
    }
}
