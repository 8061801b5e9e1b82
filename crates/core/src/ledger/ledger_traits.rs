use crate::errors::Result;
use crate::ledger::ledger_model::{
    Asset, Investment, Investor, NewAsset, NewInvestment, NewInvestor,
};
use async_trait::async_trait;

/// Trait for ledger repository operations.
///
/// Implementations return the persisted row including the store-assigned
/// identifier.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    async fn insert_investor(&self, new_investor: NewInvestor) -> Result<Investor>;
    async fn insert_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn insert_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    fn list_investors(&self) -> Result<Vec<Investor>>;
    fn list_assets(&self) -> Result<Vec<Asset>>;
    fn list_investments(&self) -> Result<Vec<Investment>>;
}

/// Trait for ledger service operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    async fn register_investor(&self, new_investor: NewInvestor) -> Result<Investor>;
    async fn record_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn record_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    fn get_investors(&self) -> Result<Vec<Investor>>;
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_investments(&self) -> Result<Vec<Investment>>;
}
