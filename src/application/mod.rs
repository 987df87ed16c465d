// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Provides the boundary between HTTP clients and the services
// - Translates requests into service calls and errors into responses
// - Owns no business rules

pub mod dto;
pub mod error_handling;
pub mod handlers;
pub mod router;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType};
pub use router::create_router;
pub use state::AppState;
