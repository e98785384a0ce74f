//! Validation utilities.

use crate::{FieldError, WaypointError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `WaypointError` on failure.
    fn validate_request(&self) -> Result<(), WaypointError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `WaypointError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> WaypointError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    WaypointError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn test_validate_request_ok() {
        let sample = Sample {
            name: "abc".to_string(),
        };
        assert!(sample.validate_request().is_ok());
    }

    #[test]
    fn test_validate_request_collects_messages() {
        let sample = Sample {
            name: "ab".to_string(),
        };
        let err = sample.validate_request().unwrap_err();
        match err {
            WaypointError::Validation(msg) => {
                assert!(msg.contains("name"));
                assert!(msg.contains("too short"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
