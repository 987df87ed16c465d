use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult, Entity};

/// A course offered by the station, taught week by week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier (None for drafts)
    #[serde(default)]
    pub num_course: Option<i64>,

    /// Skill level of the course
    pub level: i32,

    /// Individual or collective, and for which audience
    pub type_course: TypeCourse,

    /// Equipment used during the course
    pub support: Support,

    pub price: f32,

    /// Daily time slot, in hours
    pub time_slot: i32,
}

/// Kind of course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeCourse {
    Individual,
    CollectiveChildren,
    CollectiveAdult,
}

/// Equipment a course is taught on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Support {
    Ski,
    Snowboard,
}

impl Course {
    pub fn new(level: i32, type_course: TypeCourse, support: Support, price: f32, time_slot: i32) -> Self {
        Self {
            num_course: None,
            level,
            type_course,
            support,
            price,
            time_slot,
        }
    }

    /// Same course carrying a store identifier
    pub fn with_id(mut self, num_course: i64) -> Self {
        self.num_course = Some(num_course);
        self
    }
}

impl Entity for Course {
    const NAME: &'static str = "Course";

    fn id(&self) -> Option<i64> {
        self.num_course
    }

    fn validate(&self) -> DomainResult<()> {
        super::validate_course(self)
    }
}

impl std::fmt::Display for TypeCourse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeCourse::Individual => write!(f, "INDIVIDUAL"),
            TypeCourse::CollectiveChildren => write!(f, "COLLECTIVE_CHILDREN"),
            TypeCourse::CollectiveAdult => write!(f, "COLLECTIVE_ADULT"),
        }
    }
}

impl FromStr for TypeCourse {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL" => Ok(TypeCourse::Individual),
            "COLLECTIVE_CHILDREN" => Ok(TypeCourse::CollectiveChildren),
            "COLLECTIVE_ADULT" => Ok(TypeCourse::CollectiveAdult),
            other => Err(DomainError::UnknownVariant {
                kind: "course type",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Support::Ski => write!(f, "SKI"),
            Support::Snowboard => write!(f, "SNOWBOARD"),
        }
    }
}

impl FromStr for Support {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SKI" => Ok(Support::Ski),
            "SNOWBOARD" => Ok(Support::Snowboard),
            other => Err(DomainError::UnknownVariant {
                kind: "support",
                value: other.to_string(),
            }),
        }
    }
}
