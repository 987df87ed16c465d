pub mod entity;
pub mod invariants;

pub use entity::Skier;
pub use invariants::validate_skier;
