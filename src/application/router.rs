// src/application/router.rs
//
// Routes and middleware (CORS, request tracing) for the HTTP API.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    course_handlers as course, health_handlers as health, instructor_handlers as instructor,
    piste_handlers as piste, registration_handlers as registration, skier_handlers as skier,
    subscription_handlers as subscription,
};
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Pistes
        .route(
            "/pistes",
            get(piste::list_pistes)
                .post(piste::add_piste)
                .put(piste::update_piste),
        )
        .route(
            "/pistes/{id}",
            get(piste::get_piste).delete(piste::remove_piste),
        )
        // Courses
        .route(
            "/courses",
            get(course::list_courses)
                .post(course::add_course)
                .put(course::update_course),
        )
        .route("/courses/{id}", get(course::get_course))
        // Instructors
        .route(
            "/instructors",
            get(instructor::list_instructors)
                .post(instructor::add_instructor)
                .put(instructor::update_instructor),
        )
        .route("/instructors/{id}", get(instructor::get_instructor))
        .route(
            "/instructors/course/{course_id}",
            post(instructor::add_instructor_and_assign_to_course),
        )
        // Subscriptions
        .route(
            "/subscriptions",
            get(subscription::list_subscriptions)
                .post(subscription::add_subscription)
                .put(subscription::update_subscription),
        )
        .route("/subscriptions/{id}", get(subscription::get_subscription))
        .route(
            "/subscriptions/type/{type_sub}",
            get(subscription::subscriptions_by_type),
        )
        .route(
            "/subscriptions/dates",
            get(subscription::subscriptions_by_dates),
        )
        // Skiers
        .route(
            "/skiers",
            get(skier::list_skiers)
                .post(skier::add_skier)
                .put(skier::update_skier),
        )
        .route(
            "/skiers/{id}",
            get(skier::get_skier).delete(skier::remove_skier),
        )
        .route(
            "/skiers/course/{course_id}",
            post(skier::add_skier_and_assign_to_course),
        )
        .route(
            "/skiers/{id}/subscription/{sub_id}",
            put(skier::assign_skier_to_subscription),
        )
        .route(
            "/skiers/{id}/piste/{piste_id}",
            put(skier::assign_skier_to_piste),
        )
        .route(
            "/skiers/subscription-type/{type_sub}",
            get(skier::skiers_by_subscription_type),
        )
        // Registrations
        .route("/registrations", get(registration::list_registrations))
        .route("/registrations/{id}", get(registration::get_registration))
        .route(
            "/registrations/skier/{skier_id}",
            post(registration::assign_skier_to_new_registration),
        )
        .route(
            "/registrations/{id}/course/{course_id}",
            put(registration::assign_registration_to_course),
        )
        .route(
            "/registrations/skier/{skier_id}/course/{course_id}",
            post(registration::assign_skier_and_course_to_new_registration),
        )
        .route(
            "/registrations/weeks/{instructor_id}/{support}",
            get(registration::instructor_weeks_by_support),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
