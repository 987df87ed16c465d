// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// Request and response bodies that have no domain entity of their own.
// Entities (Piste, Skier, ...) travel as themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Skier;

// ============================================================================
// REGISTRATION DTOs
// ============================================================================

/// Body of the registration creation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRegistrationDto {
    pub num_week: u32,
}

// ============================================================================
// SKIER DTOs
// ============================================================================

/// A new skier plus the weeks to register them for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSkierAndAssignDto {
    pub skier: Skier,
    #[serde(default)]
    pub weeks: Vec<u32>,
}

// ============================================================================
// SUBSCRIPTION DTOs
// ============================================================================

/// `?start=YYYY-MM-DD&end=YYYY-MM-DD`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// ============================================================================
// RESPONSE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
