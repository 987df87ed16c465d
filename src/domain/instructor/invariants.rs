use super::entity::Instructor;
use crate::domain::{require_text, DomainResult};

/// Validates all Instructor invariants
pub fn validate_instructor(instructor: &Instructor) -> DomainResult<()> {
    require_text("First name", &instructor.first_name)?;
    require_text("Last name", &instructor.last_name)?;
    Ok(())
}
