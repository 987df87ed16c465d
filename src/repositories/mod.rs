// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod course_repository;
pub mod crud_repository;
pub mod instructor_repository;
pub mod piste_repository;
pub mod registration_repository;
pub mod skier_repository;
pub mod subscription_repository;

#[cfg(test)]
pub(crate) mod mocks;

pub use course_repository::{CourseRepository, SqliteCourseRepository};
pub use crud_repository::CrudRepository;
pub use instructor_repository::{InstructorRepository, SqliteInstructorRepository};
pub use piste_repository::{PisteRepository, SqlitePisteRepository};
pub use registration_repository::{RegistrationRepository, SqliteRegistrationRepository};
pub use skier_repository::{SkierRepository, SqliteSkierRepository};
pub use subscription_repository::{SqliteSubscriptionRepository, SubscriptionRepository};

use std::str::FromStr;

/// Parse an enum stored as text, reporting the failing column to rusqlite
pub(crate) fn parse_text_column<T>(idx: usize, raw: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
