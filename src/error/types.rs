// src/error/types.rs
use crate::domain::{DomainError, RegistrationRejection};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Registration rejected: {0}")]
    Rejected(#[from] RegistrationRejection),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = AppError::not_found("Skier", 42);
        assert_eq!(err.to_string(), "Skier 42 not found");
    }

    #[test]
    fn test_rejection_converts_into_app_error() {
        let err: AppError = RegistrationRejection::AgeIneligible { age: 17 }.into();
        assert!(matches!(
            err,
            AppError::Rejected(RegistrationRejection::AgeIneligible { age: 17 })
        ));
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::Other("boom".to_string())).unwrap();
        assert_eq!(json, "\"Other error: boom\"");
    }
}
