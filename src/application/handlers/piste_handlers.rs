// src/application/handlers/piste_handlers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{run_blocking, HandlerResult};
use crate::application::state::AppState;
use crate::domain::{Entity, Piste};
use crate::error::AppError;

/// GET /pistes
pub async fn list_pistes(State(state): State<AppState>) -> HandlerResult<Vec<Piste>> {
    let service = state.piste_service.clone();
    let pistes = run_blocking(move || service.retrieve_all()).await?;
    Ok(Json(pistes))
}

/// POST /pistes
pub async fn add_piste(
    State(state): State<AppState>,
    Json(piste): Json<Piste>,
) -> Result<(StatusCode, Json<Piste>), AppError> {
    let service = state.piste_service.clone();
    let saved = run_blocking(move || service.add(&piste)).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /pistes
pub async fn update_piste(
    State(state): State<AppState>,
    Json(piste): Json<Piste>,
) -> HandlerResult<Piste> {
    let service = state.piste_service.clone();
    let saved = run_blocking(move || service.update(&piste)).await?;
    Ok(Json(saved))
}

/// GET /pistes/{id}
pub async fn get_piste(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult<Piste> {
    let service = state.piste_service.clone();
    let piste = run_blocking(move || service.retrieve(id))
        .await?
        .ok_or_else(|| AppError::not_found(Piste::NAME, id))?;
    Ok(Json(piste))
}

/// DELETE /pistes/{id}
pub async fn remove_piste(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = state.piste_service.clone();
    run_blocking(move || service.remove(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
