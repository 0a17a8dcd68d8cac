//! # Clientele API
//!
//! HTTP service over the customers table.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Surface                                     │
//! │                                                                         │
//! │  GET  /customers.getById?id=N      → Customer                          │
//! │  GET  /customers.getAll            → [Customer]                        │
//! │  GET  /customers.getAllActive      → [Customer]                        │
//! │  POST /customers.save  (form)      → Customer                          │
//! │  GET  /customers.removeById?id=N   → Customer (as deleted)             │
//! │  GET  /customers.blockById?id=N    → Customer (active = false)         │
//! │  GET  /customers.unblockById?id=N  → Customer (active = true)          │
//! │  GET  /health                      → {"status":"ok"}                   │
//! │                                                                         │
//! │  400 bad input • 404 unknown id • 500 any other storage failure        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HOST` - Listen host (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 9999)
//! - `DATABASE_URL` - SQLite database path (default: clientele.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT_SECS` - Pool acquire timeout (default: 5)
//! - `RUST_LOG` - Log filter

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
