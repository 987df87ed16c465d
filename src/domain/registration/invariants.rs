use super::entity::Registration;
use crate::domain::{DomainError, DomainResult};

pub const FIRST_WEEK: u32 = 1;
pub const LAST_WEEK: u32 = 52;

/// Validates the invariants a registration must satisfy before it is saved
pub fn validate_registration(registration: &Registration) -> DomainResult<()> {
    validate_week(registration.num_week)?;
    validate_owner(registration)?;
    Ok(())
}

/// Weeks are numbered 1..=52
pub fn validate_week(num_week: u32) -> DomainResult<()> {
    if !(FIRST_WEEK..=LAST_WEEK).contains(&num_week) {
        return Err(DomainError::InvariantViolation(format!(
            "Week {} is outside {}..={}",
            num_week, FIRST_WEEK, LAST_WEEK
        )));
    }
    Ok(())
}

fn validate_owner(registration: &Registration) -> DomainResult<()> {
    if registration.skier.is_none() {
        return Err(DomainError::InvariantViolation(
            "Registration must belong to a skier".to_string(),
        ));
    }
    Ok(())
}
