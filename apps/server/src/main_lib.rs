use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use investra_core::engine::{ScriptContractEngine, ScriptEngineConfig};
use investra_core::ledger::{LedgerService, LedgerServiceTrait};
use investra_core::plans::{PlanService, PlanServiceTrait, StaticTokenVerifier};
use investra_core::scoring::CrmScorer;
use investra_storage_sqlite::db;
use investra_storage_sqlite::ledger::LedgerRepository;

pub struct AppState {
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
    pub plan_service: Arc<dyn PlanServiceTrait>,
    pub scorer: Arc<CrmScorer>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("INVESTRA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone(), writer.clone()));
    let ledger_service: Arc<dyn LedgerServiceTrait> =
        Arc::new(LedgerService::new(ledger_repository));

    let engine_config =
        ScriptEngineConfig::new(&config.contract_interpreter, &config.contract_script)
            .with_timeout(Duration::from_secs(config.engine_timeout_secs));
    let engine = Arc::new(ScriptContractEngine::new(engine_config));
    let verifier = Arc::new(StaticTokenVerifier::new(&config.api_token));
    let plan_service: Arc<dyn PlanServiceTrait> = Arc::new(PlanService::new(verifier, engine));

    // Weights are fixed for the process lifetime; seeded from entropy here,
    // tests construct the scorer with explicit weights.
    let scorer = Arc::new(CrmScorer::new(
        config.scorer_inputs,
        &mut StdRng::from_entropy(),
    ));

    Ok(Arc::new(AppState {
        ledger_service,
        plan_service,
        scorer,
        db_path,
    }))
}
