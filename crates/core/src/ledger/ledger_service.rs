use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::ledger::ledger_model::{
    Asset, Investment, Investor, NewAsset, NewInvestment, NewInvestor,
};
use crate::ledger::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use async_trait::async_trait;

/// Service layer over the ledger repository.
///
/// Enforces the invariants the store does not express as constraints:
/// non-empty investor names, non-negative slot counts and invested amounts.
/// Referential integrity of investments is left to the store's foreign keys.
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        LedgerService { repository }
    }

    fn validate_investor(new_investor: &NewInvestor) -> Result<()> {
        if new_investor.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }

    fn validate_asset(new_asset: &NewAsset) -> Result<()> {
        if new_asset.total_slots < 0 {
            return Err(Error::Validation(ValidationError::Negative {
                field: "totalSlots",
                value: new_asset.total_slots as f64,
            }));
        }
        Ok(())
    }

    fn validate_investment(new_investment: &NewInvestment) -> Result<()> {
        if new_investment.invested_amount < 0.0 {
            return Err(Error::Validation(ValidationError::Negative {
                field: "investedAmount",
                value: new_investment.invested_amount,
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn register_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
        Self::validate_investor(&new_investor)?;
        let investor = self.repository.insert_investor(new_investor).await?;
        log::debug!("Registered investor {} ({})", investor.id, investor.name);
        Ok(investor)
    }

    async fn record_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        Self::validate_asset(&new_asset)?;
        let asset = self.repository.insert_asset(new_asset).await?;
        log::debug!("Recorded asset {} ({})", asset.id, asset.asset_name);
        Ok(asset)
    }

    async fn record_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        Self::validate_investment(&new_investment)?;
        let investment = self.repository.insert_investment(new_investment).await?;
        log::debug!(
            "Recorded investment {} (investor {} -> asset {})",
            investment.id,
            investment.investor_id,
            investment.asset_id
        );
        Ok(investment)
    }

    fn get_investors(&self) -> Result<Vec<Investor>> {
        self.repository.list_investors()
    }

    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list_assets()
    }

    fn get_investments(&self) -> Result<Vec<Investment>> {
        self.repository.list_investments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DatabaseError;
    use std::sync::Mutex;

    /// In-memory repository that assigns sequential ids and enforces the
    /// foreign-key contract the real store provides.
    struct MockLedgerRepository {
        investors: Mutex<Vec<Investor>>,
        assets: Mutex<Vec<Asset>>,
        investments: Mutex<Vec<Investment>>,
    }

    impl MockLedgerRepository {
        fn new() -> Self {
            Self {
                investors: Mutex::new(Vec::new()),
                assets: Mutex::new(Vec::new()),
                investments: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LedgerRepositoryTrait for MockLedgerRepository {
        async fn insert_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
            let mut investors = self.investors.lock().unwrap();
            let investor = Investor {
                id: investors.len() as i32 + 1,
                name: new_investor.name,
                email: new_investor.email,
                phone_number: new_investor.phone_number,
            };
            investors.push(investor.clone());
            Ok(investor)
        }

        async fn insert_asset(&self, new_asset: NewAsset) -> Result<Asset> {
            let mut assets = self.assets.lock().unwrap();
            let asset = Asset {
                id: assets.len() as i32 + 1,
                asset_name: new_asset.asset_name,
                asset_type: new_asset.asset_type,
                total_slots: new_asset.total_slots,
                annual_return: new_asset.annual_return,
            };
            assets.push(asset.clone());
            Ok(asset)
        }

        async fn insert_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
            let investors = self.investors.lock().unwrap();
            let assets = self.assets.lock().unwrap();
            if !investors.iter().any(|i| i.id == new_investment.investor_id)
                || !assets.iter().any(|a| a.id == new_investment.asset_id)
            {
                return Err(Error::Database(DatabaseError::ForeignKeyViolation(
                    "investment references missing row".to_string(),
                )));
            }
            let mut investments = self.investments.lock().unwrap();
            let investment = Investment {
                id: investments.len() as i32 + 1,
                investor_id: new_investment.investor_id,
                asset_id: new_investment.asset_id,
                invested_amount: new_investment.invested_amount,
            };
            investments.push(investment.clone());
            Ok(investment)
        }

        fn list_investors(&self) -> Result<Vec<Investor>> {
            Ok(self.investors.lock().unwrap().clone())
        }

        fn list_assets(&self) -> Result<Vec<Asset>> {
            Ok(self.assets.lock().unwrap().clone())
        }

        fn list_investments(&self) -> Result<Vec<Investment>> {
            Ok(self.investments.lock().unwrap().clone())
        }
    }

    fn service() -> LedgerService {
        LedgerService::new(Arc::new(MockLedgerRepository::new()))
    }

    fn investor(name: &str) -> NewInvestor {
        NewInvestor {
            name: name.to_string(),
            email: "a@x.com".to_string(),
            phone_number: "111".to_string(),
        }
    }

    #[tokio::test]
    async fn register_investor_assigns_identifier() {
        let service = service();
        let first = service.register_investor(investor("Alice")).await.unwrap();
        let second = service.register_investor(investor("Bob")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn register_investor_rejects_empty_name() {
        let service = service();
        let result = service.register_investor(investor("  ")).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[tokio::test]
    async fn record_asset_rejects_negative_slots() {
        let service = service();
        let result = service
            .record_asset(NewAsset {
                asset_name: "Tower A".to_string(),
                asset_type: "real-estate".to_string(),
                total_slots: -1,
                annual_return: 0.07,
            })
            .await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::Negative { .. }))
        ));
    }

    #[tokio::test]
    async fn record_investment_rejects_negative_amount() {
        let service = service();
        let result = service
            .record_investment(NewInvestment {
                investor_id: 1,
                asset_id: 1,
                invested_amount: -50.0,
            })
            .await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::Negative { .. }))
        ));
    }

    #[tokio::test]
    async fn record_investment_requires_existing_rows() {
        let service = service();
        let result = service
            .record_investment(NewInvestment {
                investor_id: 99,
                asset_id: 99,
                invested_amount: 100.0,
            })
            .await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
        ));
    }

    #[tokio::test]
    async fn record_investment_links_existing_rows() {
        let service = service();
        let inv = service.register_investor(investor("Alice")).await.unwrap();
        let asset = service
            .record_asset(NewAsset {
                asset_name: "Tower A".to_string(),
                asset_type: "real-estate".to_string(),
                total_slots: 10,
                annual_return: 0.07,
            })
            .await
            .unwrap();
        let investment = service
            .record_investment(NewInvestment {
                investor_id: inv.id,
                asset_id: asset.id,
                invested_amount: 2500.0,
            })
            .await
            .unwrap();
        assert_eq!(investment.investor_id, inv.id);
        assert_eq!(investment.asset_id, asset.id);
        assert_eq!(service.get_investments().unwrap().len(), 1);
    }
}
