//! # Validation Module
//!
//! Parsing and validation of raw request inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: axum extractors                                              │
//! │  └── Query/Form decoding into optional strings                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── id: decimal i64                                                   │
//! │  └── save: name and phone not both empty                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE (phone)                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use clientele_core::validation::parse_id;
//!
//! assert_eq!(parse_id(Some("42")).unwrap(), 42);
//! assert!(parse_id(Some("abc")).is_err());
//! assert!(parse_id(None).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::SaveCustomer;
use crate::NEW_CUSTOMER_ID;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Id Parsing
// =============================================================================

/// Parses a required customer id from a query or form value.
///
/// ## Rules
/// - Must be present and non-empty
/// - Must parse as a base-10 `i64` (a leading sign is accepted)
/// - Taken verbatim: surrounding whitespace is an error, not trimmed
pub fn parse_id(raw: Option<&str>) -> ValidationResult<i64> {
    let raw = raw.unwrap_or_default();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    raw.parse::<i64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: e.to_string(),
        })
}

/// Parses the optional id carried by a save request.
///
/// Missing or empty means "create", i.e. [`NEW_CUSTOMER_ID`].
pub fn parse_optional_id(raw: Option<&str>) -> ValidationResult<i64> {
    match raw {
        None | Some("") => Ok(NEW_CUSTOMER_ID),
        Some(value) => parse_id(Some(value)),
    }
}

// =============================================================================
// Save Validation
// =============================================================================

/// Validates the fields of a save request.
///
/// ## Rules
/// - `name` and `phone` cannot both be empty
/// - Otherwise both are taken verbatim
///
/// ## Example
/// ```rust
/// use clientele_core::validation::validate_save;
///
/// assert!(validate_save(0, "Ann", "555-0100").is_ok());
/// assert!(validate_save(0, "", "").is_err());
/// ```
pub fn validate_save(id: i64, name: &str, phone: &str) -> ValidationResult<SaveCustomer> {
    if name.is_empty() && phone.is_empty() {
        return Err(ValidationError::EmptyCustomer);
    }

    Ok(SaveCustomer {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("1")).unwrap(), 1);
        assert_eq!(parse_id(Some("-5")).unwrap(), -5);
        assert_eq!(parse_id(Some("9223372036854775807")).unwrap(), i64::MAX);

        assert_eq!(
            parse_id(None),
            Err(ValidationError::Required {
                field: "id".to_string()
            })
        );
        assert!(parse_id(Some("")).is_err());
        assert!(parse_id(Some("abc")).is_err());
        assert!(parse_id(Some("1.5")).is_err());
        assert!(parse_id(Some("9223372036854775808")).is_err());
    }

    #[test]
    fn test_parse_id_rejects_surrounding_whitespace() {
        for raw in [" 42", "42 ", " 42 ", "\t1", "1\n", " "] {
            assert!(
                matches!(parse_id(Some(raw)), Err(ValidationError::InvalidFormat { .. })),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_id_invalid_format_variant() {
        let err = parse_id(Some("x1")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id(None).unwrap(), NEW_CUSTOMER_ID);
        assert_eq!(parse_optional_id(Some("")).unwrap(), NEW_CUSTOMER_ID);
        assert!(parse_optional_id(Some("  ")).is_err());
        assert!(parse_optional_id(Some(" 12")).is_err());
        assert_eq!(parse_optional_id(Some("0")).unwrap(), NEW_CUSTOMER_ID);
        assert_eq!(parse_optional_id(Some("12")).unwrap(), 12);
        assert!(parse_optional_id(Some("twelve")).is_err());
    }

    #[test]
    fn test_validate_save() {
        let save = validate_save(0, "Ann", "555-0100").unwrap();
        assert!(save.is_new());
        assert_eq!(save.name, "Ann");
        assert_eq!(save.phone, "555-0100");

        // One of the two is enough
        assert!(validate_save(0, "Ann", "").is_ok());
        assert!(validate_save(3, "", "555-0100").is_ok());

        assert_eq!(validate_save(0, "", ""), Err(ValidationError::EmptyCustomer));
    }

    #[test]
    fn test_validate_save_keeps_values_verbatim() {
        let save = validate_save(5, " Ann ", "+1 555 0100").unwrap();
        assert_eq!(save.id, 5);
        assert_eq!(save.name, " Ann ");
        assert_eq!(save.phone, "+1 555 0100");
    }
}
