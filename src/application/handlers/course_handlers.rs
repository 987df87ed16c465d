// src/application/handlers/course_handlers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{run_blocking, HandlerResult};
use crate::application::state::AppState;
use crate::domain::{Course, Entity};
use crate::error::AppError;

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> HandlerResult<Vec<Course>> {
    let service = state.course_service.clone();
    let courses = run_blocking(move || service.retrieve_all()).await?;
    Ok(Json(courses))
}

/// POST /courses
pub async fn add_course(
    State(state): State<AppState>,
    Json(course): Json<Course>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let service = state.course_service.clone();
    let saved = run_blocking(move || service.add(&course)).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /courses
pub async fn update_course(
    State(state): State<AppState>,
    Json(course): Json<Course>,
) -> HandlerResult<Course> {
    let service = state.course_service.clone();
    let saved = run_blocking(move || service.update(&course)).await?;
    Ok(Json(saved))
}

/// GET /courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Course> {
    let service = state.course_service.clone();
    let course = run_blocking(move || service.retrieve(id))
        .await?
        .ok_or_else(|| AppError::not_found(Course::NAME, id))?;
    Ok(Json(course))
}
