// src/application/handlers/instructor_handlers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{run_blocking, HandlerResult};
use crate::application::state::AppState;
use crate::domain::{Entity, Instructor};
use crate::error::AppError;

/// GET /instructors
pub async fn list_instructors(State(state): State<AppState>) -> HandlerResult<Vec<Instructor>> {
    let service = state.instructor_service.clone();
    let instructors = run_blocking(move || service.retrieve_all_instructors()).await?;
    Ok(Json(instructors))
}

/// POST /instructors
pub async fn add_instructor(
    State(state): State<AppState>,
    Json(instructor): Json<Instructor>,
) -> Result<(StatusCode, Json<Instructor>), AppError> {
    let service = state.instructor_service.clone();
    let saved = run_blocking(move || service.add_instructor(&instructor)).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /instructors
pub async fn update_instructor(
    State(state): State<AppState>,
    Json(instructor): Json<Instructor>,
) -> HandlerResult<Instructor> {
    let service = state.instructor_service.clone();
    let saved = run_blocking(move || service.update_instructor(&instructor)).await?;
    Ok(Json(saved))
}

/// GET /instructors/{id}
pub async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Instructor> {
    let service = state.instructor_service.clone();
    let instructor = run_blocking(move || service.retrieve_instructor(id))
        .await?
        .ok_or_else(|| AppError::not_found(Instructor::NAME, id))?;
    Ok(Json(instructor))
}

/// POST /instructors/course/{course_id}
pub async fn add_instructor_and_assign_to_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(instructor): Json<Instructor>,
) -> Result<(StatusCode, Json<Instructor>), AppError> {
    let service = state.instructor_service.clone();
    let saved = run_blocking(move || {
        service.add_instructor_and_assign_to_course(instructor, course_id)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}
