//! # Error Types
//!
//! Domain-specific error types for clientele-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  clientele-core errors (this file)                                     │
//! │  └── ValidationError  - Request input failures (→ HTTP 400)            │
//! │                                                                         │
//! │  clientele-db errors (separate crate)                                  │
//! │  └── DbError          - Not-found and internal failures                │
//! │                                                                         │
//! │  HTTP errors (in apps/api)                                             │
//! │  └── ApiError         - Status code + logged cause                     │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError(400)                                 │
//! │        DbError::NotFound → ApiError(404), other DbError → ApiError(500)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any data access happens and always map to a
/// client error at the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a non-numeric id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Save request carried neither a name nor a phone.
    #[error("name and phone cannot both be empty")]
    EmptyCustomer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must be a decimal integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "id has invalid format: must be a decimal integer"
        );

        assert_eq!(
            ValidationError::EmptyCustomer.to_string(),
            "name and phone cannot both be empty"
        );
    }

    #[test]
    fn test_validation_errors_compare() {
        assert_eq!(ValidationError::EmptyCustomer, ValidationError::EmptyCustomer);
        assert_ne!(
            ValidationError::EmptyCustomer,
            ValidationError::Required {
                field: "id".to_string()
            }
        );
    }
}
