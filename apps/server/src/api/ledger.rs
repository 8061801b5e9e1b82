//! Ledger read/create endpoints.

use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use investra_core::ledger::{
    Asset, Investment, Investor, NewAsset, NewInvestment, NewInvestor,
};

async fn list_investors(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Investor>>> {
    let investors = state.ledger_service.get_investors()?;
    Ok(Json(investors))
}

async fn register_investor(
    State(state): State<Arc<AppState>>,
    Json(new_investor): Json<NewInvestor>,
) -> ApiResult<Json<Investor>> {
    let investor = state.ledger_service.register_investor(new_investor).await?;
    Ok(Json(investor))
}

async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.ledger_service.get_assets()?;
    Ok(Json(assets))
}

async fn record_asset(
    State(state): State<Arc<AppState>>,
    Json(new_asset): Json<NewAsset>,
) -> ApiResult<Json<Asset>> {
    let asset = state.ledger_service.record_asset(new_asset).await?;
    Ok(Json(asset))
}

async fn list_investments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state.ledger_service.get_investments()?;
    Ok(Json(investments))
}

async fn record_investment(
    State(state): State<Arc<AppState>>,
    Json(new_investment): Json<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    let investment = state
        .ledger_service
        .record_investment(new_investment)
        .await?;
    Ok(Json(investment))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/ledger/investors",
            get(list_investors).post(register_investor),
        )
        .route("/ledger/assets", get(list_assets).post(record_asset))
        .route(
            "/ledger/investments",
            get(list_investments).post(record_investment),
        )
}
