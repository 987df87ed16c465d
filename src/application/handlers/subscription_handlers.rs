// src/application/handlers/subscription_handlers.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{run_blocking, HandlerResult};
use crate::application::{dto::DateRangeQuery, state::AppState};
use crate::domain::{Entity, Subscription, TypeSubscription};
use crate::error::AppError;

/// GET /subscriptions
pub async fn list_subscriptions(
    State(state): State<AppState>,
) -> HandlerResult<Vec<Subscription>> {
    let service = state.subscription_service.clone();
    let subscriptions = run_blocking(move || service.retrieve_all_subscriptions()).await?;
    Ok(Json(subscriptions))
}

/// POST /subscriptions
///
/// The end date is derived from the start date and type.
pub async fn add_subscription(
    State(state): State<AppState>,
    Json(subscription): Json<Subscription>,
) -> Result<(StatusCode, Json<Subscription>), AppError> {
    let service = state.subscription_service.clone();
    let saved = run_blocking(move || service.add_subscription(subscription)).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /subscriptions
pub async fn update_subscription(
    State(state): State<AppState>,
    Json(subscription): Json<Subscription>,
) -> HandlerResult<Subscription> {
    let service = state.subscription_service.clone();
    let saved = run_blocking(move || service.update_subscription(&subscription)).await?;
    Ok(Json(saved))
}

/// GET /subscriptions/{id}
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Subscription> {
    let service = state.subscription_service.clone();
    let subscription = run_blocking(move || service.retrieve_subscription_by_id(id))
        .await?
        .ok_or_else(|| AppError::not_found(Subscription::NAME, id))?;
    Ok(Json(subscription))
}

/// GET /subscriptions/type/{type}
pub async fn subscriptions_by_type(
    State(state): State<AppState>,
    Path(type_sub): Path<String>,
) -> HandlerResult<Vec<Subscription>> {
    let type_sub: TypeSubscription = type_sub.parse()?;

    let service = state.subscription_service.clone();
    let subscriptions = run_blocking(move || service.get_subscriptions_by_type(type_sub)).await?;
    Ok(Json(subscriptions))
}

/// GET /subscriptions/dates?start=&end=
pub async fn subscriptions_by_dates(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> HandlerResult<Vec<Subscription>> {
    let service = state.subscription_service.clone();
    let subscriptions = run_blocking(move || {
        service.retrieve_subscriptions_by_dates(range.start, range.end)
    })
    .await?;
    Ok(Json(subscriptions))
}
