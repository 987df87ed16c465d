// src/domain/registration/rules.rs
//
// Registration admission rules
//
// Each check is pure: the caller supplies the counts it read from the store
// and the skier's age. The registration service runs them in order:
// duplicate, then (collective children only) age, then capacity.

use serde::Serialize;
use thiserror::Error;

use crate::domain::course::TypeCourse;

/// Skiers must be strictly younger than this to join a collective children course
pub const CHILD_AGE_LIMIT: u32 = 16;

/// Registrations per (course, week) at which a collective children course is full
pub const COLLECTIVE_CHILDREN_WEEKLY_CAPACITY: u32 = 6;

/// Why a registration was refused
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RegistrationRejection {
    #[error("skier {skier_id} is already registered to course {course_id} for week {week}")]
    DuplicateRegistration {
        skier_id: i64,
        course_id: i64,
        week: u32,
    },

    #[error("a skier aged {age} cannot join a collective children course")]
    AgeIneligible { age: u32 },

    #[error("course {course_id} is full for week {week} ({registered} registrations)")]
    CourseFull {
        course_id: i64,
        week: u32,
        registered: u32,
    },
}

/// Rejects a second registration for the same (week, skier, course)
pub fn ensure_not_duplicate(
    existing: u32,
    skier_id: i64,
    course_id: i64,
    week: u32,
) -> Result<(), RegistrationRejection> {
    if existing > 0 {
        return Err(RegistrationRejection::DuplicateRegistration {
            skier_id,
            course_id,
            week,
        });
    }
    Ok(())
}

/// Only collective children courses are gated on age and weekly capacity
pub fn is_gated(type_course: TypeCourse) -> bool {
    type_course == TypeCourse::CollectiveChildren
}

pub fn ensure_child_age(age: u32) -> Result<(), RegistrationRejection> {
    if age >= CHILD_AGE_LIMIT {
        return Err(RegistrationRejection::AgeIneligible { age });
    }
    Ok(())
}

pub fn ensure_capacity(registered: u32, course_id: i64, week: u32) -> Result<(), RegistrationRejection> {
    if registered >= COLLECTIVE_CHILDREN_WEEKLY_CAPACITY {
        return Err(RegistrationRejection::CourseFull {
            course_id,
            week,
            registered,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_existing_registration_is_a_duplicate() {
        assert!(ensure_not_duplicate(0, 1, 2, 3).is_ok());
        assert_eq!(
            ensure_not_duplicate(1, 1, 2, 3),
            Err(RegistrationRejection::DuplicateRegistration {
                skier_id: 1,
                course_id: 2,
                week: 3
            })
        );
    }

    #[test]
    fn test_only_collective_children_is_gated() {
        assert!(is_gated(TypeCourse::CollectiveChildren));
        assert!(!is_gated(TypeCourse::CollectiveAdult));
        assert!(!is_gated(TypeCourse::Individual));
    }

    #[test]
    fn test_age_limit_is_exclusive() {
        assert!(ensure_child_age(15).is_ok());
        assert_eq!(
            ensure_child_age(16),
            Err(RegistrationRejection::AgeIneligible { age: 16 })
        );
    }

    #[test]
    fn test_sixth_seat_is_the_last() {
        assert!(ensure_capacity(5, 4, 1).is_ok());
        assert!(matches!(
            ensure_capacity(6, 4, 1),
            Err(RegistrationRejection::CourseFull { registered: 6, .. })
        ));
    }

    #[test]
    fn test_rejection_serializes_with_reason_tag() {
        let json = serde_json::to_value(RegistrationRejection::AgeIneligible { age: 17 }).unwrap();
        assert_eq!(json["reason"], "age_ineligible");
        assert_eq!(json["age"], 17);
    }
}
