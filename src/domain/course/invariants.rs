use super::entity::Course;
use crate::domain::{require_price, DomainError, DomainResult};

/// Validates all Course invariants
pub fn validate_course(course: &Course) -> DomainResult<()> {
    require_price(course.price)?;
    validate_time_slot(course.time_slot)?;
    Ok(())
}

fn validate_time_slot(time_slot: i32) -> DomainResult<()> {
    if time_slot < 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Time slot {} cannot be negative",
            time_slot
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::{Support, TypeCourse};

    #[test]
    fn test_valid_course() {
        let course = Course::new(1, TypeCourse::Individual, Support::Ski, 120.0, 2);
        assert!(validate_course(&course).is_ok());
    }

    #[test]
    fn test_negative_price_fails() {
        let course = Course::new(1, TypeCourse::CollectiveAdult, Support::Snowboard, -5.0, 2);
        assert!(validate_course(&course).is_err());
    }

    #[test]
    fn test_type_course_round_trips_through_text() {
        for kind in [
            TypeCourse::Individual,
            TypeCourse::CollectiveChildren,
            TypeCourse::CollectiveAdult,
        ] {
            assert_eq!(kind.to_string().parse::<TypeCourse>().unwrap(), kind);
        }
        assert!("COLLECTIVE".parse::<TypeCourse>().is_err());
    }

    #[test]
    fn test_support_serializes_in_upper_case() {
        let json = serde_json::to_string(&Support::Snowboard).unwrap();
        assert_eq!(json, "\"SNOWBOARD\"");
    }
}
