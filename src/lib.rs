// src/lib.rs
// Ski Station - management backend for a ski resort
//
// Architecture:
// - Domain-centric: entities, invariants and admission rules live in domain
// - Repositories: explicit SQL over a pooled SQLite database
// - Services: synchronous orchestration, one generic CRUD core
// - Application Layer: axum HTTP boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    // Course
    Course,
    // Errors
    DomainError,
    Entity,
    // Instructor
    Instructor,
    // Piste
    Piste,
    Color,
    // Registration
    Registration,
    RegistrationRejection,
    // Skier
    Skier,
    // Subscription
    Subscription,
    Support,
    TypeCourse,
    TypeSubscription,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration & Database
// ============================================================================

pub use config::AppConfig;
pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CourseRepository, CrudRepository, InstructorRepository, PisteRepository,
    RegistrationRepository, SkierRepository, SubscriptionRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CourseService, CrudService, InstructorService, PisteService, RegistrationService,
    SkierService, SubscriptionService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{create_router, AppState};
