// src/application/handlers/mod.rs
//
// HTTP Handlers
//
// ARCHITECTURE:
// - Handlers are thin adapters between HTTP and Services
// - Handlers extract path/query/body, call one service operation
// - Service calls are synchronous and run on tokio's blocking pool
// - Handlers NEVER contain business logic

pub mod course_handlers;
pub mod health_handlers;
pub mod instructor_handlers;
pub mod piste_handlers;
pub mod registration_handlers;
pub mod skier_handlers;
pub mod subscription_handlers;

use axum::Json;

use crate::error::{AppError, AppResult};

/// Result type for handlers
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run a synchronous service call off the async runtime
pub(crate) async fn run_blocking<T, F>(call: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| AppError::Other(format!("Task join error: {}", e)))?
}
