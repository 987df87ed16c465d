// src/application/handlers/health_handlers.rs

use axum::{extract::State, Json};

use super::{run_blocking, HandlerResult};
use crate::application::{dto::HealthResponse, state::AppState};
use crate::db::{get_connection, verify_database_integrity};

/// GET /health
///
/// Liveness plus a database reachability probe.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let pool = state.pool.clone();
    let probe = run_blocking(move || {
        let conn = get_connection(&pool)?;
        verify_database_integrity(&conn)
    })
    .await;

    let database = match probe {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    }))
}
