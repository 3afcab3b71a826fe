//! SQLite storage implementation for Sleevefolio.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `sleevefolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for holdings and the valuation history
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod history;
pub mod holdings;


// Re-export database utilities
pub use db::{
    create_pool, create_writer, get_connection, get_db_path, init, run_migrations, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use history::HistoryRepository;
pub use holdings::HoldingsRepository;

// Re-export from sleevefolio-core for convenience
pub use sleevefolio_core::errors::{DatabaseError, Error, Result};
