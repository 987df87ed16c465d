use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, Entity};

/// A ski or snowboard instructor employed by the station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(default)]
    pub num_instructor: Option<i64>,

    pub first_name: String,

    pub last_name: String,

    pub date_of_hire: NaiveDate,

    /// Identifiers of the courses this instructor teaches
    #[serde(default)]
    pub courses: Vec<i64>,
}

impl Instructor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, date_of_hire: NaiveDate) -> Self {
        Self {
            num_instructor: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_hire,
            courses: Vec::new(),
        }
    }

    pub fn with_id(mut self, num_instructor: i64) -> Self {
        self.num_instructor = Some(num_instructor);
        self
    }

    /// Add a course to the set taught by this instructor
    pub fn assign_course(&mut self, course_id: i64) {
        if !self.courses.contains(&course_id) {
            self.courses.push(course_id);
        }
    }
}

impl Entity for Instructor {
    const NAME: &'static str = "Instructor";

    fn id(&self) -> Option<i64> {
        self.num_instructor
    }

    fn validate(&self) -> DomainResult<()> {
        super::validate_instructor(self)
    }
}
