//! Plan action request payloads.
//!
//! Field names are fixed by the wire contract (`plan_name`,
//! `initial_investment`, `investor_address`); amounts are stringified before
//! being handed to the contract engine, which takes ordered string arguments.

use serde::{Deserialize, Serialize};

/// Request to create a new investment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlanRequest {
    pub token: String,
    pub plan_name: String,
    pub initial_investment: i64,
}

/// Request to invest into an existing plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestRequest {
    pub token: String,
    pub plan_name: String,
    pub amount: i64,
    pub investor_address: String,
}
