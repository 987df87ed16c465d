pub mod entity;
pub mod invariants;

pub use entity::Instructor;
pub use invariants::validate_instructor;
