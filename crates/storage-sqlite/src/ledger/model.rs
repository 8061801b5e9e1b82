//! Database models for the ledger.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for investors
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::investors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InvestorDB {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Database model for inserting an investor
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::investors)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestorDB {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Database model for assets
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AssetDB {
    pub id: i32,
    pub asset_name: String,
    pub asset_type: String,
    pub total_slots: i32,
    pub annual_return: f64,
}

/// Database model for inserting an asset
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[serde(rename_all = "camelCase")]
pub struct NewAssetDB {
    pub asset_name: String,
    pub asset_type: String,
    pub total_slots: i32,
    pub annual_return: f64,
}

/// Database model for investments
#[derive(
    Queryable, Identifiable, Associations, Selectable, PartialEq, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(belongs_to(InvestorDB, foreign_key = investor_id))]
#[diesel(belongs_to(AssetDB, foreign_key = asset_id))]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDB {
    pub id: i32,
    pub investor_id: i32,
    pub asset_id: i32,
    pub invested_amount: f64,
}

/// Database model for inserting an investment
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestmentDB {
    pub investor_id: i32,
    pub asset_id: i32,
    pub invested_amount: f64,
}

// Conversion to domain models
impl From<InvestorDB> for investra_core::ledger::Investor {
    fn from(db: InvestorDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone_number: db.phone_number,
        }
    }
}

impl From<AssetDB> for investra_core::ledger::Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            id: db.id,
            asset_name: db.asset_name,
            asset_type: db.asset_type,
            total_slots: db.total_slots,
            annual_return: db.annual_return,
        }
    }
}

impl From<InvestmentDB> for investra_core::ledger::Investment {
    fn from(db: InvestmentDB) -> Self {
        Self {
            id: db.id,
            investor_id: db.investor_id,
            asset_id: db.asset_id,
            invested_amount: db.invested_amount,
        }
    }
}

impl From<investra_core::ledger::NewInvestor> for NewInvestorDB {
    fn from(domain: investra_core::ledger::NewInvestor) -> Self {
        Self {
            name: domain.name,
            email: domain.email,
            phone_number: domain.phone_number,
        }
    }
}

impl From<investra_core::ledger::NewAsset> for NewAssetDB {
    fn from(domain: investra_core::ledger::NewAsset) -> Self {
        Self {
            asset_name: domain.asset_name,
            asset_type: domain.asset_type,
            total_slots: domain.total_slots,
            annual_return: domain.annual_return,
        }
    }
}

impl From<investra_core::ledger::NewInvestment> for NewInvestmentDB {
    fn from(domain: investra_core::ledger::NewInvestment) -> Self {
        Self {
            investor_id: domain.investor_id,
            asset_id: domain.asset_id,
            invested_amount: domain.invested_amount,
        }
    }
}
