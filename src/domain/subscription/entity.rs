use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult, Entity};

/// A ski pass held by a skier for a period of time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub num_sub: Option<i64>,

    pub start_date: NaiveDate,

    /// Derived from start date and type when the subscription is added,
    /// so drafts may omit it
    #[serde(default)]
    pub end_date: NaiveDate,

    pub price: f32,

    pub type_sub: TypeSubscription,
}

/// Duration class of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeSubscription {
    Annual,
    Monthly,
    Semestriel,
}

impl TypeSubscription {
    /// Number of months a subscription of this type covers
    pub fn months(&self) -> u32 {
        match self {
            TypeSubscription::Annual => 12,
            TypeSubscription::Semestriel => 6,
            TypeSubscription::Monthly => 1,
        }
    }

    /// End date of a subscription of this type starting on `start_date`.
    ///
    /// Month arithmetic clamps to the last day of the target month
    /// (2024-01-31 + 1 month = 2024-02-29).
    pub fn end_date_from(&self, start_date: NaiveDate) -> DomainResult<NaiveDate> {
        start_date
            .checked_add_months(Months::new(self.months()))
            .ok_or_else(|| {
                DomainError::InvariantViolation(format!(
                    "Subscription starting {} cannot end within the supported calendar",
                    start_date
                ))
            })
    }
}

impl Subscription {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        price: f32,
        type_sub: TypeSubscription,
    ) -> Self {
        Self {
            num_sub: None,
            start_date,
            end_date,
            price,
            type_sub,
        }
    }

    /// Build a subscription whose end date follows from its type
    pub fn starting(start_date: NaiveDate, price: f32, type_sub: TypeSubscription) -> DomainResult<Self> {
        let end_date = type_sub.end_date_from(start_date)?;
        Ok(Self::new(start_date, end_date, price, type_sub))
    }

    pub fn with_id(mut self, num_sub: i64) -> Self {
        self.num_sub = Some(num_sub);
        self
    }

    /// Recompute the end date from the start date and type
    pub fn recompute_end_date(&mut self) -> DomainResult<()> {
        self.end_date = self.type_sub.end_date_from(self.start_date)?;
        Ok(())
    }
}

impl Entity for Subscription {
    const NAME: &'static str = "Subscription";

    fn id(&self) -> Option<i64> {
        self.num_sub
    }

    fn validate(&self) -> DomainResult<()> {
        super::validate_subscription(self)
    }
}

impl std::fmt::Display for TypeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeSubscription::Annual => write!(f, "ANNUAL"),
            TypeSubscription::Monthly => write!(f, "MONTHLY"),
            TypeSubscription::Semestriel => write!(f, "SEMESTRIEL"),
        }
    }
}

impl FromStr for TypeSubscription {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANNUAL" => Ok(TypeSubscription::Annual),
            "MONTHLY" => Ok(TypeSubscription::Monthly),
            "SEMESTRIEL" => Ok(TypeSubscription::Semestriel),
            other => Err(DomainError::UnknownVariant {
                kind: "subscription type",
                value: other.to_string(),
            }),
        }
    }
}
