// src/services/registration_service.rs
//
// Registration Service - Admission Workflow
//
// RESPONSIBILITIES:
// - Link registrations to skiers and courses
// - Enforce admission rules before persisting:
//   1. no duplicate (week, skier, course)
//   2. collective children courses: skier under 16
//   3. collective children courses: fewer than 6 registrations that week
// - Report every refusal as a distinct RegistrationRejection
//
// CONCURRENCY:
// The check-then-write sequence runs under an admission lock so two
// concurrent requests cannot both pass the capacity check. The UNIQUE
// constraint on (week, skier, course) backs the duplicate rule in storage.

use chrono::{Local, NaiveDate};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::registration::rules::{
    ensure_capacity, ensure_child_age, ensure_not_duplicate, is_gated,
};
use crate::domain::{
    validate_registration, Course, Entity, Registration, RegistrationRejection, Skier, Support,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{CourseRepository, RegistrationRepository, SkierRepository};

pub struct RegistrationService {
    registration_repo: Arc<dyn RegistrationRepository>,
    skier_repo: Arc<dyn SkierRepository>,
    course_repo: Arc<dyn CourseRepository>,
    admission: Mutex<()>,
}

impl RegistrationService {
    pub fn new(
        registration_repo: Arc<dyn RegistrationRepository>,
        skier_repo: Arc<dyn SkierRepository>,
        course_repo: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            registration_repo,
            skier_repo,
            course_repo,
            admission: Mutex::new(()),
        }
    }

    /// Attach an existing skier to a new registration and persist it
    pub fn assign_skier_to_new_registration(
        &self,
        mut registration: Registration,
        num_skier: i64,
    ) -> AppResult<Registration> {
        self.find_skier(num_skier)?;

        registration.assign_skier(num_skier);
        validate_registration(&registration)?;

        let saved = self.registration_repo.save(&registration)?;
        log::info!(
            "Registration {:?} created for skier {}",
            saved.num_registration,
            num_skier
        );
        Ok(saved)
    }

    /// Point an existing registration at a course. The skier must not
    /// already hold another registration for that course and week.
    pub fn assign_registration_to_course(
        &self,
        num_registration: i64,
        num_course: i64,
    ) -> AppResult<Registration> {
        let _admission = self.lock_admission();

        let mut registration = self
            .registration_repo
            .find_by_id(num_registration)?
            .ok_or_else(|| AppError::not_found(Registration::NAME, num_registration))?;
        self.find_course(num_course)?;

        if registration.course == Some(num_course) {
            return Ok(registration);
        }

        registration.assign_course(num_course);
        validate_registration(&registration)?;

        if let Some(num_skier) = registration.skier {
            let week = registration.num_week;
            let existing = self
                .registration_repo
                .count_distinct_by_week_skier_course(week, num_skier, num_course)?;
            ensure_not_duplicate(existing, num_skier, num_course, week).map_err(Self::reject)?;
        }

        let saved = self.registration_repo.save(&registration)?;
        log::info!(
            "Registration {} assigned to course {}",
            num_registration,
            num_course
        );
        Ok(saved)
    }

    /// Register a skier to a course for the draft's week, applying the
    /// admission rules. Nothing is persisted when a rule refuses.
    pub fn assign_skier_and_course_to_new_registration(
        &self,
        mut registration: Registration,
        num_skier: i64,
        num_course: i64,
    ) -> AppResult<Registration> {
        let _admission = self.lock_admission();

        // 1. Both ends of the link must exist
        let skier = self.find_skier(num_skier)?;
        let course = self.find_course(num_course)?;

        registration.assign_skier(num_skier);
        registration.assign_course(num_course);
        validate_registration(&registration)?;
        let week = registration.num_week;

        // 2. Duplicate check applies to every course type
        let existing =
            self.registration_repo
                .count_distinct_by_week_skier_course(week, num_skier, num_course)?;
        ensure_not_duplicate(existing, num_skier, num_course, week).map_err(Self::reject)?;

        // 3. Age and capacity gate collective children courses only
        if is_gated(course.type_course) {
            let age = skier.age_on(today());
            ensure_child_age(age).map_err(Self::reject)?;

            let registered = self
                .registration_repo
                .count_by_course_and_week(num_course, week)?;
            ensure_capacity(registered, num_course, week).map_err(Self::reject)?;
        }

        // 4. Persist
        let saved = self.registration_repo.save(&registration)?;
        log::info!(
            "Skier {} registered to course {} for week {}",
            num_skier,
            num_course,
            week
        );
        Ok(saved)
    }

    pub fn num_weeks_course_of_instructor_by_support(
        &self,
        num_instructor: i64,
        support: Support,
    ) -> AppResult<Vec<u32>> {
        self.registration_repo
            .num_weeks_course_of_instructor_by_support(num_instructor, support)
    }

    pub fn retrieve_registration(&self, num_registration: i64) -> AppResult<Option<Registration>> {
        self.registration_repo.find_by_id(num_registration)
    }

    pub fn retrieve_all_registrations(&self) -> AppResult<Vec<Registration>> {
        self.registration_repo.find_all()
    }

    fn find_skier(&self, num_skier: i64) -> AppResult<Skier> {
        self.skier_repo
            .find_by_id(num_skier)?
            .ok_or_else(|| AppError::not_found(Skier::NAME, num_skier))
    }

    fn find_course(&self, num_course: i64) -> AppResult<Course> {
        self.course_repo
            .find_by_id(num_course)?
            .ok_or_else(|| AppError::not_found(Course::NAME, num_course))
    }

    /// The guarded value is `()`, so a poisoned lock is safe to reuse
    fn lock_admission(&self) -> MutexGuard<'_, ()> {
        self.admission
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn reject(rejection: RegistrationRejection) -> AppError {
        log::warn!("Registration refused: {}", rejection);
        AppError::Rejected(rejection)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
