//! Core error types for Sleevefolio.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio core.
///
/// Every failure propagates to the invoking layer unchanged; nothing in the
/// core retries internally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse amount: {0}")]
    Parse(#[from] AmountParseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Raised by the money parser when a value cannot be read as an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("unsupported amount type: {0}")]
    UnsupportedType(String),

    #[error("unrecognized amount format: '{0}'")]
    Unparsable(String),
}

/// Validation errors for user input. Fatal to the invocation that raised them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Holding '{code}' has a non-positive price ({price})")]
    NonPositivePrice { code: String, price: Decimal },

    #[error("Total investable value is zero; nothing to rebalance")]
    ZeroInvestableBasis,

    #[error("New cash cannot be negative ({0})")]
    NegativeCash(Decimal),

    #[error("Unknown sleeve '{0}'")]
    UnknownSleeve(String),

    #[error("Invalid period key '{0}', expected YYYY-MM or YYYY-MM-DD")]
    InvalidPeriodKey(String),

    #[error("Duplicate holding code '{0}'")]
    DuplicateHoldingCode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error, including corrupted stored values.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for a free-form validation failure.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
