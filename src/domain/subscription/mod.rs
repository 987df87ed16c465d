pub mod entity;
pub mod invariants;

pub use entity::{Subscription, TypeSubscription};
pub use invariants::validate_subscription;
