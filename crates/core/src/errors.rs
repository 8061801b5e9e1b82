//! Core error types for the Investra application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger and gateway application.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Contract engine failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Investor import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
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

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated, e.g. an investment referencing
    /// an investor or asset id that does not exist.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Errors raised while invoking the external contract engine.
///
/// The engine is an out-of-process script executor; every failure mode of an
/// invocation (spawn failure, non-zero exit, deadline exceeded) is terminal
/// for the request that triggered it.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to spawn contract engine '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Contract function '{function}' exited with {status}: {output}")]
    NonZeroExit {
        function: String,
        status: String,
        output: String,
    },

    #[error("Contract function '{function}' exceeded the {timeout_secs}s deadline")]
    Timeout { function: String, timeout_secs: u64 },
}

/// Errors raised by the spreadsheet investor importer.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to open workbook '{path}': {reason}")]
    Workbook { path: String, reason: String },

    #[error("Workbook has no sheets")]
    NoSheet,

    #[error("Row {row}: {reason}")]
    Row { row: usize, reason: String },
}

/// Errors raised by the CRM scorer.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Feature vector has {actual} entries, scorer expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
