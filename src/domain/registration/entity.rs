use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, Entity};

/// Links a skier to a course for one week of the season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub num_registration: Option<i64>,

    /// Week of the year (1..=52)
    pub num_week: u32,

    /// Owning skier; required once the registration is saved
    #[serde(default)]
    pub skier: Option<i64>,

    /// Assigned course, if any
    #[serde(default)]
    pub course: Option<i64>,
}

impl Registration {
    /// Create an unsaved, unassigned registration for a week
    pub fn new(num_week: u32) -> Self {
        Self {
            num_registration: None,
            num_week,
            skier: None,
            course: None,
        }
    }

    pub fn with_id(mut self, num_registration: i64) -> Self {
        self.num_registration = Some(num_registration);
        self
    }

    pub fn assign_skier(&mut self, skier_id: i64) {
        self.skier = Some(skier_id);
    }

    /// Replaces any previously assigned course
    pub fn assign_course(&mut self, course_id: i64) {
        self.course = Some(course_id);
    }
}

impl Entity for Registration {
    const NAME: &'static str = "Registration";

    fn id(&self) -> Option<i64> {
        self.num_registration
    }

    fn validate(&self) -> DomainResult<()> {
        super::validate_registration(self)
    }
}
