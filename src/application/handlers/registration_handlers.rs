// src/application/handlers/registration_handlers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{run_blocking, HandlerResult};
use crate::application::{dto::NewRegistrationDto, state::AppState};
use crate::domain::{Entity, Registration, Support};
use crate::error::AppError;

/// GET /registrations
pub async fn list_registrations(
    State(state): State<AppState>,
) -> HandlerResult<Vec<Registration>> {
    let service = state.registration_service.clone();
    let registrations = run_blocking(move || service.retrieve_all_registrations()).await?;
    Ok(Json(registrations))
}

/// GET /registrations/{id}
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Registration> {
    let service = state.registration_service.clone();
    let registration = run_blocking(move || service.retrieve_registration(id))
        .await?
        .ok_or_else(|| AppError::not_found(Registration::NAME, id))?;
    Ok(Json(registration))
}

/// POST /registrations/skier/{skier_id}
pub async fn assign_skier_to_new_registration(
    State(state): State<AppState>,
    Path(skier_id): Path<i64>,
    Json(dto): Json<NewRegistrationDto>,
) -> Result<(StatusCode, Json<Registration>), AppError> {
    let service = state.registration_service.clone();
    let saved = run_blocking(move || {
        service.assign_skier_to_new_registration(Registration::new(dto.num_week), skier_id)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /registrations/{id}/course/{course_id}
pub async fn assign_registration_to_course(
    State(state): State<AppState>,
    Path((id, course_id)): Path<(i64, i64)>,
) -> HandlerResult<Registration> {
    let service = state.registration_service.clone();
    let saved = run_blocking(move || service.assign_registration_to_course(id, course_id)).await?;
    Ok(Json(saved))
}

/// POST /registrations/skier/{skier_id}/course/{course_id}
///
/// Full admission workflow; refusals come back as 409 or 422.
pub async fn assign_skier_and_course_to_new_registration(
    State(state): State<AppState>,
    Path((skier_id, course_id)): Path<(i64, i64)>,
    Json(dto): Json<NewRegistrationDto>,
) -> Result<(StatusCode, Json<Registration>), AppError> {
    let service = state.registration_service.clone();
    let saved = run_blocking(move || {
        service.assign_skier_and_course_to_new_registration(
            Registration::new(dto.num_week),
            skier_id,
            course_id,
        )
    })
    .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /registrations/weeks/{instructor_id}/{support}
pub async fn instructor_weeks_by_support(
    State(state): State<AppState>,
    Path((instructor_id, support)): Path<(i64, String)>,
) -> HandlerResult<Vec<u32>> {
    let support: Support = support.parse()?;

    let service = state.registration_service.clone();
    let weeks = run_blocking(move || {
        service.num_weeks_course_of_instructor_by_support(instructor_id, support)
    })
    .await?;
    Ok(Json(weeks))
}
