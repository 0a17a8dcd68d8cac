//! # clientele-core: Pure Domain Logic for Clientele
//!
//! The customer domain model with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Clientele Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum handlers)                     │   │
//! │  │    /customers.getById, /customers.save, /customers.blockById…   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ clientele-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐               │   │
//! │  │   │   types   │  │  validation  │  │   error   │               │   │
//! │  │   │ Customer  │  │  parse_id    │  │ Validation│               │   │
//! │  │   │ SaveCust. │  │  validate_…  │  │   Error   │               │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                clientele-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, SaveCustomer)
//! - [`error`] - Domain error types
//! - [`validation`] - Request input parsing and validation
//!
//! ## Example Usage
//!
//! ```rust
//! use clientele_core::validation::{parse_optional_id, validate_save};
//!
//! let id = parse_optional_id(None).unwrap();
//! let input = validate_save(id, "Ann", "555-0100").unwrap();
//! assert!(input.is_new());
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::*;

/// Sentinel id meaning "not yet assigned" on a save request.
pub const NEW_CUSTOMER_ID: i64 = 0;
