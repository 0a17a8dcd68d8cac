//! # Application State
//!
//! Shared state handed to every handler.
//!
//! ## Thread Safety
//! `Database` wraps a `SqlitePool`, which is internally synchronized.
//! Handlers run concurrently and each checks out its own connection; there
//! is no other shared mutable state.

use clientele_db::Database;

/// Shared application state.
///
/// Built once in `main` from the pool opened at startup and injected into
/// the router; handlers never reach for a global.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    /// Creates the state around an open database.
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
