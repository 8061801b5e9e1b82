use investra_core::ledger::{
    Asset, Investment, Investor, LedgerRepositoryTrait, NewAsset, NewInvestment, NewInvestor,
};
use investra_core::Result;

use super::model::{
    AssetDB, InvestmentDB, InvestorDB, NewAssetDB, NewInvestmentDB, NewInvestorDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{assets, investments, investors};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

/// Diesel-backed ledger repository.
///
/// Reads go through the pool; inserts go through the writer actor so SQLite
/// only ever sees one writer. `RETURNING` captures the generated id.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LedgerRepository { pool, writer }
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    async fn insert_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investor> {
                let new_investor_db: NewInvestorDB = new_investor.into();
                let result_db = diesel::insert_into(investors::table)
                    .values(&new_investor_db)
                    .returning(InvestorDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Investor::from(result_db))
            })
            .await
    }

    async fn insert_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let new_asset_db: NewAssetDB = new_asset.into();
                let result_db = diesel::insert_into(assets::table)
                    .values(&new_asset_db)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Asset::from(result_db))
            })
            .await
    }

    async fn insert_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let new_investment_db: NewInvestmentDB = new_investment.into();
                let result_db = diesel::insert_into(investments::table)
                    .values(&new_investment_db)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    fn list_investors(&self) -> Result<Vec<Investor>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = investors::table
            .order(investors::id.asc())
            .load::<InvestorDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Investor::from).collect())
    }

    fn list_assets(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = assets::table
            .order(assets::id.asc())
            .load::<AssetDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Asset::from).collect())
    }

    fn list_investments(&self) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = investments::table
            .order(investments::id.asc())
            .load::<InvestmentDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Investment::from).collect())
    }
}
