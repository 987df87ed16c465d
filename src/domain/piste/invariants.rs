use super::entity::Piste;
use crate::domain::{require_text, DomainError, DomainResult};

/// Validates all Piste invariants
pub fn validate_piste(piste: &Piste) -> DomainResult<()> {
    require_text("Piste name", &piste.name_piste)?;
    validate_dimensions(piste)?;
    Ok(())
}

/// Length and slope are physical measures and cannot be negative
fn validate_dimensions(piste: &Piste) -> DomainResult<()> {
    if piste.length < 0 || piste.slope < 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Piste dimensions must be non-negative (length {}, slope {})",
            piste.length, piste.slope
        )));
    }
    Ok(())
}
