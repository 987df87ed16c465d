// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod course;
pub mod instructor;
pub mod piste;
pub mod registration;
pub mod skier;
pub mod subscription;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Course Domain
pub use course::{validate_course, Course, Support, TypeCourse};

// Instructor Domain
pub use instructor::{validate_instructor, Instructor};

// Piste Domain
pub use piste::{validate_piste, Color, Piste};

// Registration Domain
pub use registration::{
    validate_registration, Registration, RegistrationRejection, CHILD_AGE_LIMIT,
    COLLECTIVE_CHILDREN_WEEKLY_CAPACITY,
};

// Skier Domain
pub use skier::{validate_skier, Skier};

// Subscription Domain
pub use subscription::{validate_subscription, Subscription, TypeSubscription};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

// ============================================================================
// ENTITY CONTRACT
// ============================================================================

/// Common surface of every persisted entity.
///
/// Identifiers are assigned by the store: an entity whose `id()` is `None`
/// is a draft that has never been saved.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in errors and logs.
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    /// Checks the entity's invariants before it reaches the store.
    fn validate(&self) -> DomainResult<()>;
}

/// Rejects blank text fields.
pub(crate) fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Rejects negative or non-finite amounts.
pub(crate) fn require_price(price: f32) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Price {} must be a non-negative amount",
            price
        )));
    }
    Ok(())
}
