//! Batch-imports investors from an xlsx workbook into the ledger.
//!
//! Usage: `import_investors <workbook.xlsx>`
//!
//! The batch aborts on the first bad row; the process exits non-zero with
//! the failing row's index in the diagnostic output.

use std::sync::Arc;

use investra_core::import::ImportService;
use investra_core::ledger::{LedgerService, LedgerServiceTrait};
use investra_server::{config::Config, init_tracing};
use investra_storage_sqlite::db;
use investra_storage_sqlite::ledger::LedgerRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env();

    let workbook = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: import_investors <workbook.xlsx>"))?;

    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let ledger: Arc<dyn LedgerServiceTrait> = Arc::new(LedgerService::new(Arc::new(
        LedgerRepository::new(pool, writer),
    )));
    let importer = ImportService::new(ledger);

    let count = importer.import_investors(&workbook).await?;
    tracing::info!("Imported {} investors from {}", count, workbook);
    Ok(())
}
