pub mod entity;
pub mod invariants;

pub use entity::{Color, Piste};
pub use invariants::validate_piste;
