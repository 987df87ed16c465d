// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::repositories::{
    SqliteCourseRepository, SqliteInstructorRepository, SqlitePisteRepository,
    SqliteRegistrationRepository, SqliteSkierRepository, SqliteSubscriptionRepository,
};
use crate::services::{
    CourseService, InstructorService, PisteService, RegistrationService, SkierService,
    SubscriptionService,
};

/// Shared state handed to every handler.
/// All fields are Arc-wrapped so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub piste_service: Arc<PisteService>,
    pub course_service: Arc<CourseService>,
    pub instructor_service: Arc<InstructorService>,
    pub subscription_service: Arc<SubscriptionService>,
    pub skier_service: Arc<SkierService>,
    pub registration_service: Arc<RegistrationService>,
}

impl AppState {
    /// Wire the SQLite repositories and services over one pool
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let piste_repo = Arc::new(SqlitePisteRepository::new(pool.clone()));
        let course_repo = Arc::new(SqliteCourseRepository::new(pool.clone()));
        let instructor_repo = Arc::new(SqliteInstructorRepository::new(pool.clone()));
        let subscription_repo = Arc::new(SqliteSubscriptionRepository::new(pool.clone()));
        let skier_repo = Arc::new(SqliteSkierRepository::new(pool.clone()));
        let registration_repo = Arc::new(SqliteRegistrationRepository::new(pool.clone()));

        Self {
            piste_service: Arc::new(PisteService::new(piste_repo.clone())),
            course_service: Arc::new(CourseService::new(course_repo.clone())),
            instructor_service: Arc::new(InstructorService::new(
                instructor_repo,
                course_repo.clone(),
            )),
            subscription_service: Arc::new(SubscriptionService::new(subscription_repo.clone())),
            skier_service: Arc::new(SkierService::new(
                skier_repo.clone(),
                subscription_repo,
                piste_repo,
                course_repo.clone(),
            )),
            registration_service: Arc::new(RegistrationService::new(
                registration_repo,
                skier_repo,
                course_repo,
            )),
            pool,
        }
    }
}
