// src/application/error_handling.rs
//
// Error Handling for HTTP Handlers
//
// ARCHITECTURE:
// - Maps internal errors → status code + JSON body
// - Provides a consistent error format for clients
// - Never exposes infrastructure details in 500 responses
// - Logs errors for debugging

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::RegistrationRejection;
use crate::error::AppError;

/// Standard error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Domain invariant violation or malformed value (422)
    Validation,

    /// Registration refused because an equivalent one exists or the course is full (409)
    Conflict,

    /// Registration refused because the skier is not eligible (422)
    Ineligible,

    /// Database/persistence error (500)
    Database,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::Validation | ErrorType::Ineligible => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorType::Conflict => StatusCode::CONFLICT,
            ErrorType::Database | ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            not_found @ AppError::NotFound { .. } => {
                Self::new(ErrorType::NotFound, not_found.to_string(), None)
            }

            AppError::Domain(domain_error) => Self::new(
                ErrorType::Validation,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Rejected(rejection) => {
                let error_type = match rejection {
                    RegistrationRejection::AgeIneligible { .. } => ErrorType::Ineligible,
                    RegistrationRejection::DuplicateRegistration { .. }
                    | RegistrationRejection::CourseFull { .. } => ErrorType::Conflict,
                };
                Self::new(
                    error_type,
                    "Registration rejected",
                    Some(rejection.to_string()),
                )
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(ErrorType::Internal, "File system operation failed", None)
            }

            AppError::Config(message) | AppError::Other(message) => {
                log::error!("Internal error: {}", message);
                Self::new(ErrorType::Internal, "Internal error", None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.error_type.status_code(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorResponse::from_app_error(self).into_response()
    }
}
