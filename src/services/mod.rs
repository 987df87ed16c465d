// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services validate, apply business rules and call repositories.
// They are synchronous; the HTTP layer runs them on the blocking pool.

pub mod crud_service;
pub mod instructor_service;
pub mod registration_service;
pub mod skier_service;
pub mod subscription_service;

pub use crud_service::{CourseService, CrudService, PisteService};
pub use instructor_service::InstructorService;
pub use registration_service::RegistrationService;
pub use skier_service::SkierService;
pub use subscription_service::SubscriptionService;
