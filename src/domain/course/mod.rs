pub mod entity;
pub mod invariants;

pub use entity::{Course, Support, TypeCourse};
pub use invariants::validate_course;
