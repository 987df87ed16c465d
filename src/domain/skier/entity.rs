use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::subscription::Subscription;
use crate::domain::{DomainResult, Entity};

/// A registered customer of the station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skier {
    #[serde(default)]
    pub num_skier: Option<i64>,

    pub first_name: String,

    pub last_name: String,

    /// Used to compute age-based course eligibility
    pub date_of_birth: NaiveDate,

    pub city: String,

    /// Current subscription, if any (stored by reference)
    #[serde(default)]
    pub subscription: Option<Subscription>,

    /// Identifiers of the pistes assigned to this skier
    #[serde(default)]
    pub pistes: Vec<i64>,
}

impl Skier {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        city: impl Into<String>,
    ) -> Self {
        Self {
            num_skier: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            city: city.into(),
            subscription: None,
            pistes: Vec::new(),
        }
    }

    pub fn with_id(mut self, num_skier: i64) -> Self {
        self.num_skier = Some(num_skier);
        self
    }

    /// Age in completed years on `today`.
    ///
    /// A birth date in the future yields 0.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let born = self.date_of_birth;
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// Assign a piste; already-assigned pistes are left untouched
    pub fn assign_piste(&mut self, piste_id: i64) {
        if !self.pistes.contains(&piste_id) {
            self.pistes.push(piste_id);
        }
    }
}

impl Entity for Skier {
    const NAME: &'static str = "Skier";

    fn id(&self) -> Option<i64> {
        self.num_skier
    }

    fn validate(&self) -> DomainResult<()> {
        super::validate_skier(self)
    }
}
