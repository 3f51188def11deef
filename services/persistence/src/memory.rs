//! In-memory SalesStore implementation for testing.

use async_trait::async_trait;
use sales_types::record::SalesRecord;
use tokio::sync::RwLock;

use crate::error::{Result, StorageError};
use crate::store::SalesStore;

/// Store that keeps records in a vector, in insertion order.
#[derive(Default)]
pub struct MemorySalesStore {
    records: RwLock<Vec<SalesRecord>>,
    fail_on_read: RwLock<bool>,
    fail_on_insert: RwLock<bool>,
}

impl MemorySalesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records.
    pub fn with_records(records: Vec<SalesRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    pub async fn set_fail_on_read(&self, fail: bool) {
        *self.fail_on_read.write().await = fail;
    }

    pub async fn set_fail_on_insert(&self, fail: bool) {
        *self.fail_on_insert.write().await = fail;
    }

    /// Snapshot of the stored records.
    pub async fn records(&self) -> Vec<SalesRecord> {
        self.records.read().await.clone()
    }

    async fn check_read(&self) -> Result<()> {
        if *self.fail_on_read.read().await {
            return Err(StorageError::Backend("simulated read failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SalesStore for MemorySalesStore {
    async fn fetch_all(&self, limit: usize) -> Result<Vec<SalesRecord>> {
        self.check_read().await?;
        let records = self.records.read().await;
        Ok(records.iter().take(limit).cloned().collect())
    }

    async fn fetch_recent(&self, limit: usize) -> Result<Vec<SalesRecord>> {
        self.check_read().await?;
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records.truncate(limit);
        Ok(records)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut records = self.records.write().await;
        let deleted = records.len() as u64;
        records.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, records: Vec<SalesRecord>) -> Result<u64> {
        if *self.fail_on_insert.read().await {
            return Err(StorageError::Backend(
                "simulated insert failure".to_string(),
            ));
        }
        let inserted = records.len() as u64;
        self.records.write().await.extend(records);
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64> {
        self.check_read().await?;
        Ok(self.records.read().await.len() as u64)
    }
}
