//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Waypoint account service.
///
/// This enum covers domain, application, infrastructure, and presentation
/// layer errors.
#[derive(Error, Debug)]
pub enum WaypointError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaypointError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error originates from the cache layer.
    ///
    /// Cache failures degrade to store access and must never abort a
    /// request that the store can satisfy.
    #[must_use]
    pub const fn is_cache_error(&self) -> bool {
        matches!(self, Self::Cache(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for WaypointError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // Check for unique constraint violation
                if let Some(code) = db_err.code() {
                    if code == "23505" || code == "1062" {
                        // PostgreSQL / MySQL unique violation
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for WaypointError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `WaypointError`.
    #[must_use]
    pub fn from_error(error: &WaypointError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&WaypointError> for ErrorResponse {
    fn from(error: &WaypointError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(WaypointError::not_found("User", 1).status_code(), 404);
        assert_eq!(WaypointError::validation("invalid email").status_code(), 400);
        assert_eq!(WaypointError::conflict("duplicate").status_code(), 409);
        assert_eq!(WaypointError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(WaypointError::Cache("redis down".to_string()).status_code(), 500);
        assert_eq!(WaypointError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(WaypointError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(WaypointError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(WaypointError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(WaypointError::Cache("c".to_string()).error_code(), "CACHE_ERROR");
        assert_eq!(WaypointError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_is_cache_error() {
        assert!(WaypointError::Cache("timeout".to_string()).is_cache_error());
        assert!(!WaypointError::not_found("User", 1).is_cache_error());
        assert!(!WaypointError::Database("down".to_string()).is_cache_error());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = WaypointError::not_found("User", "123");
        assert!(not_found.to_string().contains("User"));

        let validation = WaypointError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let conflict = WaypointError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = WaypointError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = WaypointError::validation("bad input");
        let details = vec![FieldError {
            field: "email".to_string(),
            message: "Invalid email".to_string(),
            code: "INVALID_EMAIL".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert!(response.details.is_some());
        assert_eq!(response.details.unwrap().len(), 1);
    }
}
