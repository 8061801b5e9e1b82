//! Ledger module - domain models, services, and traits.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

pub use ledger_model::{Asset, Investment, Investor, NewAsset, NewInvestment, NewInvestor};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
