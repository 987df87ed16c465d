// src/application/handlers/skier_handlers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{run_blocking, HandlerResult};
use crate::application::{dto::AddSkierAndAssignDto, state::AppState};
use crate::domain::{Entity, Skier, TypeSubscription};
use crate::error::AppError;

/// GET /skiers
pub async fn list_skiers(State(state): State<AppState>) -> HandlerResult<Vec<Skier>> {
    let service = state.skier_service.clone();
    let skiers = run_blocking(move || service.retrieve_all_skiers()).await?;
    Ok(Json(skiers))
}

/// POST /skiers
pub async fn add_skier(
    State(state): State<AppState>,
    Json(skier): Json<Skier>,
) -> Result<(StatusCode, Json<Skier>), AppError> {
    let service = state.skier_service.clone();
    let saved = run_blocking(move || service.add_skier(skier)).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /skiers
pub async fn update_skier(
    State(state): State<AppState>,
    Json(skier): Json<Skier>,
) -> HandlerResult<Skier> {
    let service = state.skier_service.clone();
    let saved = run_blocking(move || service.update_skier(&skier)).await?;
    Ok(Json(saved))
}

/// GET /skiers/{id}
pub async fn get_skier(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult<Skier> {
    let service = state.skier_service.clone();
    let skier = run_blocking(move || service.retrieve_skier(id))
        .await?
        .ok_or_else(|| AppError::not_found(Skier::NAME, id))?;
    Ok(Json(skier))
}

/// DELETE /skiers/{id}
pub async fn remove_skier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = state.skier_service.clone();
    run_blocking(move || service.remove_skier(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /skiers/course/{course_id}
pub async fn add_skier_and_assign_to_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(dto): Json<AddSkierAndAssignDto>,
) -> Result<(StatusCode, Json<Skier>), AppError> {
    let service = state.skier_service.clone();
    let saved = run_blocking(move || {
        service.add_skier_and_assign_to_course(dto.skier, &dto.weeks, course_id)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /skiers/{id}/subscription/{sub_id}
pub async fn assign_skier_to_subscription(
    State(state): State<AppState>,
    Path((id, sub_id)): Path<(i64, i64)>,
) -> HandlerResult<Skier> {
    let service = state.skier_service.clone();
    let skier = run_blocking(move || service.assign_skier_to_subscription(id, sub_id)).await?;
    Ok(Json(skier))
}

/// PUT /skiers/{id}/piste/{piste_id}
pub async fn assign_skier_to_piste(
    State(state): State<AppState>,
    Path((id, piste_id)): Path<(i64, i64)>,
) -> HandlerResult<Skier> {
    let service = state.skier_service.clone();
    let skier = run_blocking(move || service.assign_skier_to_piste(id, piste_id)).await?;
    Ok(Json(skier))
}

/// GET /skiers/subscription-type/{type}
pub async fn skiers_by_subscription_type(
    State(state): State<AppState>,
    Path(type_sub): Path<String>,
) -> HandlerResult<Vec<Skier>> {
    let type_sub: TypeSubscription = type_sub.parse()?;

    let service = state.skier_service.clone();
    let skiers =
        run_blocking(move || service.retrieve_skiers_by_subscription_type(type_sub)).await?;
    Ok(Json(skiers))
}
