//! HTTP API routers.

mod ledger;
mod plans;

use std::sync::Arc;

use crate::main_lib::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new().merge(plans::router()).merge(ledger::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
