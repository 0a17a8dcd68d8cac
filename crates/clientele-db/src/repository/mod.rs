//! # Repository Module
//!
//! Database repository implementations for Clientele.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  state.db.customers().block_by_id(42)                           │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                     │
//! │  ├── all / all_active                                                   │
//! │  ├── by_id                                                              │
//! │  ├── save                                                               │
//! │  └── remove_by_id / block_by_id / unblock_by_id                         │
//! │       │                                                                 │
//! │       │  Parameterized SQL (?1, ?2, ...)                                │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - Customer CRUD and status toggles

pub mod customer;
