use super::entity::Skier;
use crate::domain::subscription::validate_subscription;
use crate::domain::{require_text, DomainResult};

/// Validates all Skier invariants
pub fn validate_skier(skier: &Skier) -> DomainResult<()> {
    require_text("First name", &skier.first_name)?;
    require_text("Last name", &skier.last_name)?;
    if let Some(subscription) = &skier.subscription {
        validate_subscription(subscription)?;
    }
    Ok(())
}
