//! Investra server - axum HTTP app wiring the ledger, plan gateway, and
//! CRM scorer together.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
