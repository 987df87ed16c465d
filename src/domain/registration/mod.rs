//! Registration Invariants:
//!
//! 1. A saved registration belongs to exactly one skier
//! 2. A registration references at most one course at a time
//! 3. One registration per (week, skier, course)
//! 4. Collective children courses admit skiers under 16 only
//! 5. Collective children courses hold at most 6 registrations per week

pub mod entity;
pub mod invariants;
pub mod rules;

pub use entity::Registration;
pub use invariants::{validate_registration, validate_week};
pub use rules::{RegistrationRejection, CHILD_AGE_LIMIT, COLLECTIVE_CHILDREN_WEEKLY_CAPACITY};
