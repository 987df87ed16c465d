use super::entity::Subscription;
use crate::domain::{require_price, DomainError, DomainResult};

/// Validates all Subscription invariants
pub fn validate_subscription(subscription: &Subscription) -> DomainResult<()> {
    require_price(subscription.price)?;
    validate_period(subscription)?;
    Ok(())
}

/// A subscription cannot end before it starts
fn validate_period(subscription: &Subscription) -> DomainResult<()> {
    if subscription.start_date > subscription.end_date {
        return Err(DomainError::InvariantViolation(format!(
            "Start date {} cannot be after end date {}",
            subscription.start_date, subscription.end_date
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::TypeSubscription;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_date_follows_type() {
        let start = date(2024, 1, 15);
        assert_eq!(
            TypeSubscription::Monthly.end_date_from(start).unwrap(),
            date(2024, 2, 15)
        );
        assert_eq!(
            TypeSubscription::Semestriel.end_date_from(start).unwrap(),
            date(2024, 7, 15)
        );
        assert_eq!(
            TypeSubscription::Annual.end_date_from(start).unwrap(),
            date(2025, 1, 15)
        );
    }

    #[test]
    fn test_month_end_is_clamped() {
        let end = TypeSubscription::Monthly
            .end_date_from(date(2024, 1, 31))
            .unwrap();
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn test_inverted_period_fails() {
        let sub = Subscription::new(date(2024, 3, 1), date(2024, 2, 1), 100.0, TypeSubscription::Monthly);
        assert!(validate_subscription(&sub).is_err());
    }

    #[test]
    fn test_starting_builds_valid_subscription() {
        let sub = Subscription::starting(date(2024, 12, 1), 600.0, TypeSubscription::Semestriel).unwrap();
        assert_eq!(sub.end_date, date(2025, 6, 1));
        assert!(validate_subscription(&sub).is_ok());
    }
}
