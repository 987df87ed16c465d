use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult, Entity};

/// A slope of the station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piste {
    #[serde(default)]
    pub num_piste: Option<i64>,

    pub name_piste: String,

    /// Difficulty color
    pub color: Color,

    /// Length in metres
    pub length: i32,

    /// Slope in percent
    pub slope: i32,
}

/// Difficulty rating of a piste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Green,
    Blue,
    Red,
    Black,
}

impl Piste {
    pub fn new(name_piste: impl Into<String>, color: Color, length: i32, slope: i32) -> Self {
        Self {
            num_piste: None,
            name_piste: name_piste.into(),
            color,
            length,
            slope,
        }
    }

    pub fn with_id(mut self, num_piste: i64) -> Self {
        self.num_piste = Some(num_piste);
        self
    }
}

impl Entity for Piste {
    const NAME: &'static str = "Piste";

    fn id(&self) -> Option<i64> {
        self.num_piste
    }

    fn validate(&self) -> DomainResult<()> {
        super::validate_piste(self)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Green => write!(f, "GREEN"),
            Color::Blue => write!(f, "BLUE"),
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GREEN" => Ok(Color::Green),
            "BLUE" => Ok(Color::Blue),
            "RED" => Ok(Color::Red),
            "BLACK" => Ok(Color::Black),
            other => Err(DomainError::UnknownVariant {
                kind: "color",
                value: other.to_string(),
            }),
        }
    }
}
