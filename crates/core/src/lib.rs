//! Investra Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the investment ledger and
//! contract gateway. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod engine;
pub mod errors;
pub mod import;
pub mod ledger;
pub mod plans;
pub mod scoring;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
