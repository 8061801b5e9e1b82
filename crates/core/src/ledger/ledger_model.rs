//! Ledger domain models.
//!
//! All three entities are append-only: identifiers are assigned by the store
//! on insert and records are never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Domain model representing a registered investor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Input model for registering a new investor.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Domain model representing an investable asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i32,
    pub asset_name: String,
    /// Open vocabulary (e.g. "real-estate", "bond"); not validated.
    pub asset_type: String,
    pub total_slots: i32,
    pub annual_return: f64,
}

/// Input model for recording a new asset.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub asset_name: String,
    pub asset_type: String,
    pub total_slots: i32,
    pub annual_return: f64,
}

/// Domain model linking an investor to an asset with an invested amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i32,
    pub investor_id: i32,
    pub asset_id: i32,
    pub invested_amount: f64,
}

/// Input model for recording a new investment. Both referenced ids must
/// resolve to existing rows at insert time; the store enforces this.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub investor_id: i32,
    pub asset_id: i32,
    pub invested_amount: f64,
}
