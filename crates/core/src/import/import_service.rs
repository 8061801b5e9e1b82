//! Batch import of investor records from an xlsx workbook.
//!
//! Layout contract: first sheet, row 0 is a header and is skipped, columns
//! 0-2 hold name/email/phone as text. The batch aborts on the first bad row
//! and the error carries that row's index; rows already inserted stay in the
//! ledger (no transaction spans the batch).

use std::path::Path;
use std::sync::Arc;

use calamine::{open_workbook_auto, Data, Reader};

use crate::errors::{ImportError, Result};
use crate::ledger::{LedgerServiceTrait, NewInvestor};

pub struct ImportService {
    ledger: Arc<dyn LedgerServiceTrait>,
}

impl ImportService {
    pub fn new(ledger: Arc<dyn LedgerServiceTrait>) -> Self {
        ImportService { ledger }
    }

    /// Imports every data row of the workbook's first sheet as an investor.
    /// Returns the number of rows inserted.
    pub async fn import_investors(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path).map_err(|e| ImportError::Workbook {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ImportError::NoSheet)?
            .map_err(|e| ImportError::Workbook {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();
        let count = self.import_rows(&rows).await?;
        log::info!("Imported {} investors from {}", count, path.display());
        Ok(count)
    }

    /// Inserts investors from in-memory sheet rows, skipping the header row.
    pub async fn import_rows(&self, rows: &[Vec<Data>]) -> Result<usize> {
        let mut count = 0;
        for (row_index, row) in rows.iter().enumerate().skip(1) {
            let new_investor = investor_from_row(row_index, row)?;
            self.ledger.register_investor(new_investor).await?;
            count += 1;
        }
        Ok(count)
    }
}

fn investor_from_row(
    row_index: usize,
    row: &[Data],
) -> std::result::Result<NewInvestor, ImportError> {
    Ok(NewInvestor {
        name: text_cell(row_index, row, 0)?,
        email: text_cell(row_index, row, 1)?,
        phone_number: text_cell(row_index, row, 2)?,
    })
}

fn text_cell(
    row_index: usize,
    row: &[Data],
    column: usize,
) -> std::result::Result<String, ImportError> {
    match row.get(column) {
        Some(Data::String(value)) => Ok(value.clone()),
        Some(other) => Err(ImportError::Row {
            row: row_index,
            reason: format!("column {} is not text (found {:?})", column, other),
        }),
        None => Err(ImportError::Row {
            row: row_index,
            reason: format!("column {} is missing", column),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::ledger::{
        Asset, Investment, Investor, LedgerRepositoryTrait, LedgerService, NewAsset, NewInvestment,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Repository that records inserted investors in order.
    struct RecordingRepository {
        inserted: Mutex<Vec<NewInvestor>>,
    }

    impl RecordingRepository {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                inserted: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LedgerRepositoryTrait for RecordingRepository {
        async fn insert_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push(new_investor.clone());
            Ok(Investor {
                id: inserted.len() as i32,
                name: new_investor.name,
                email: new_investor.email,
                phone_number: new_investor.phone_number,
            })
        }

        async fn insert_asset(&self, _new_asset: NewAsset) -> Result<Asset> {
            unimplemented!()
        }

        async fn insert_investment(&self, _new_investment: NewInvestment) -> Result<Investment> {
            unimplemented!()
        }

        fn list_investors(&self) -> Result<Vec<Investor>> {
            unimplemented!()
        }

        fn list_assets(&self) -> Result<Vec<Asset>> {
            unimplemented!()
        }

        fn list_investments(&self) -> Result<Vec<Investment>> {
            unimplemented!()
        }
    }

    fn text_row(name: &str, email: &str, phone: &str) -> Vec<Data> {
        vec![
            Data::String(name.to_string()),
            Data::String(email.to_string()),
            Data::String(phone.to_string()),
        ]
    }

    fn header() -> Vec<Data> {
        text_row("name", "email", "phone")
    }

    #[tokio::test]
    async fn imports_data_rows_in_order() {
        let repository = RecordingRepository::new();
        let service = ImportService::new(Arc::new(LedgerService::new(repository.clone())));

        let rows = vec![
            header(),
            text_row("Alice", "a@x.com", "111"),
            text_row("Bob", "b@x.com", "222"),
        ];
        let count = service.import_rows(&rows).await.unwrap();
        assert_eq!(count, 2);

        let inserted = repository.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 2);
        assert_eq!(inserted[0].name, "Alice");
        assert_eq!(inserted[0].email, "a@x.com");
        assert_eq!(inserted[0].phone_number, "111");
        assert_eq!(inserted[1].name, "Bob");
    }

    #[tokio::test]
    async fn header_only_sheet_imports_nothing() {
        let repository = RecordingRepository::new();
        let service = ImportService::new(Arc::new(LedgerService::new(repository.clone())));

        let count = service.import_rows(&[header()]).await.unwrap();
        assert_eq!(count, 0);
        assert!(repository.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bad_row_aborts_remaining_rows() {
        let repository = RecordingRepository::new();
        let service = ImportService::new(Arc::new(LedgerService::new(repository.clone())));

        let rows = vec![
            header(),
            text_row("Alice", "a@x.com", "111"),
            // Missing phone cell
            vec![
                Data::String("Bob".to_string()),
                Data::String("b@x.com".to_string()),
            ],
            text_row("Carol", "c@x.com", "333"),
        ];
        let result = service.import_rows(&rows).await;
        match result {
            Err(Error::Import(ImportError::Row { row, .. })) => assert_eq!(row, 2),
            other => panic!("expected row error, got {:?}", other),
        }
        // Carol is never reached; Alice's insert stands.
        assert_eq!(repository.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn numeric_cell_is_rejected() {
        let repository = RecordingRepository::new();
        let service = ImportService::new(Arc::new(LedgerService::new(repository.clone())));

        let rows = vec![
            header(),
            vec![
                Data::String("Alice".to_string()),
                Data::String("a@x.com".to_string()),
                Data::Float(111.0),
            ],
        ];
        let result = service.import_rows(&rows).await;
        assert!(matches!(
            result,
            Err(Error::Import(ImportError::Row { row: 1, .. }))
        ));
    }

    #[tokio::test]
    async fn unreadable_workbook_fails() {
        let repository = RecordingRepository::new();
        let service = ImportService::new(Arc::new(LedgerService::new(repository)));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.xlsx");
        let result = service.import_investors(&missing).await;
        assert!(matches!(
            result,
            Err(Error::Import(ImportError::Workbook { .. }))
        ));
    }
}
