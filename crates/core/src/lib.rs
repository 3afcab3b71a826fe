//! Sleevefolio Core - Domain entities, services, and traits.
//!
//! This crate contains the rebalancing logic for a portfolio split into
//! independent sleeves. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod history;
pub mod holdings;
pub mod money;
pub mod rebalancing;
pub mod sleeves;
pub mod utils;

pub use config::{PortfolioConfig, SleeveSeed};
pub use sleeves::Sleeve;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
