//! Storage interface for sales records

use async_trait::async_trait;
use sales_types::record::SalesRecord;

use crate::error::Result;

/// Document-store operations needed by ingestion and analytics.
///
/// Implementations:
/// - `MongoSalesStore`: MongoDB storage
/// - `MemorySalesStore`: in-memory storage for tests
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Fetch at most `limit` records, in storage order.
    async fn fetch_all(&self, limit: usize) -> Result<Vec<SalesRecord>>;

    /// Fetch at most `limit` records sorted by `date` descending.
    ///
    /// Order among records sharing a date is storage-dependent.
    async fn fetch_recent(&self, limit: usize) -> Result<Vec<SalesRecord>>;

    /// Remove every record. Returns the number deleted.
    async fn delete_all(&self) -> Result<u64>;

    /// Insert all records in one batch. Returns the number inserted.
    async fn insert_many(&self, records: Vec<SalesRecord>) -> Result<u64>;

    /// Number of records currently stored.
    async fn count(&self) -> Result<u64>;
}
