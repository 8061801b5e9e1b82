//! SQLite storage implementation for Investra.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `investra-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations (the idempotent `initialize` path)
//! - The ledger repository implementation
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod ledger;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from investra-core for convenience
pub use investra_core::errors::{DatabaseError, Error, Result};
