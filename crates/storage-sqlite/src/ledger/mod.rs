//! Ledger repository implementation.

mod model;
mod repository;

pub use model::{AssetDB, InvestmentDB, InvestorDB, NewAssetDB, NewInvestmentDB, NewInvestorDB};
pub use repository::LedgerRepository;
