//! Destructive replacement of the sales collection
//!
//! Run order:
//! 1. Parse and validate the whole source (`source::read_records`)
//! 2. Delete every stored record
//! 3. Insert the parsed batch (skipped when empty)
//! 4. Report the stored total
//!
//! Concurrent runs against the same collection are not coordinated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use persistence::{SalesStore, StorageError};
use sales_types::errors::ValidationError;
use tracing::{info, warn};

use crate::source::read_records;

/// Errors that can occur during an ingestion run.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("source not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to read source: {0}")]
    Csv(#[from] csv::Error),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Loads a tabular source into a sales store.
pub struct SalesLoader {
    store: Arc<dyn SalesStore>,
}

impl SalesLoader {
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store }
    }

    /// Replace the stored record set with the rows of `source`.
    ///
    /// Returns the number of records inserted; zero is a valid outcome.
    /// Nothing is deleted unless every row validates.
    pub async fn ingest(&self, source: &Path) -> Result<u64, IngestionError> {
        let records = read_records(source)?;

        let deleted = self.store.delete_all().await?;
        info!(deleted, "Cleared existing sales data");

        let inserted = if records.is_empty() {
            warn!(path = %source.display(), "No records to insert");
            0
        } else {
            let inserted = self.store.insert_many(records).await?;
            info!(inserted, "Inserted sales records");
            inserted
        };

        let total = self.store.count().await?;
        info!(total, "Total records in database");

        Ok(inserted)
    }
}
