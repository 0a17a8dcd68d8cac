//! # Domain Types
//!
//! The customer entity and the input accepted by the save operation.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Customer                                        │
//! │  ─────────────────────────────────                                      │
//! │  id       i64         assigned by the store, 0 = "not yet assigned"     │
//! │  name     String      display name                                      │
//! │  phone    String      UNIQUE, natural key for upsert                    │
//! │  active   bool        true = usable, false = blocked                    │
//! │  created  DateTime    set once at creation                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::NEW_CUSTOMER_ID;

// =============================================================================
// Customer
// =============================================================================

/// A persisted customer row.
///
/// Serializes to the wire shape returned by every endpoint:
/// `{"id":1,"name":"Ann","phone":"555-0100","active":true,"created":"..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Phone number, unique across customers.
    pub phone: String,

    /// Whether the account is usable (false = blocked).
    pub active: bool,

    /// When the customer was created.
    pub created: DateTime<Utc>,
}

impl Customer {
    /// Checks if the customer is blocked.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        !self.active
    }
}

// =============================================================================
// Save Input
// =============================================================================

/// Validated input for the save operation.
///
/// Build it through [`crate::validation::validate_save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCustomer {
    /// Target id; [`NEW_CUSTOMER_ID`] means upsert by phone.
    pub id: i64,
    pub name: String,
    pub phone: String,
}

impl SaveCustomer {
    /// True when the save creates (or upserts by phone) rather than updating by id.
    #[inline]
    pub fn is_new(&self) -> bool {
        self.id == NEW_CUSTOMER_ID
    }
}
