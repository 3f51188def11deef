//! MongoDB SalesStore implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use sales_types::record::SalesRecord;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::store::SalesStore;

/// MongoDB implementation of SalesStore.
pub struct MongoSalesStore {
    client: Client,
    sales: Collection<SalesRecord>,
}

impl MongoSalesStore {
    /// Connect using the configured connection string.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongo_url).await?;

        info!(
            database = %config.database,
            collection = %config.collection,
            "MongoDB client created"
        );

        Ok(Self::new(client, &config.database, &config.collection))
    }

    /// Wrap an existing client.
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let sales = client.database(database).collection(collection);
        Self { client, sales }
    }

    /// Release the client and its connection pool.
    pub async fn shutdown(self) {
        info!("Shutting down MongoDB client");
        self.client.shutdown().await;
    }
}

#[async_trait]
impl SalesStore for MongoSalesStore {
    async fn fetch_all(&self, limit: usize) -> Result<Vec<SalesRecord>> {
        let cursor = self
            .sales
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .limit(limit as i64)
            .await?;

        let records: Vec<SalesRecord> = cursor.try_collect().await?;
        debug!(count = records.len(), limit, "Fetched sales records");
        Ok(records)
    }

    async fn fetch_recent(&self, limit: usize) -> Result<Vec<SalesRecord>> {
        let cursor = self
            .sales
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .sort(doc! { "date": -1 })
            .limit(limit as i64)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = self.sales.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, records: Vec<SalesRecord>) -> Result<u64> {
        // The server rejects an empty batch
        if records.is_empty() {
            return Ok(0);
        }

        let result = self.sales.insert_many(records).await?;
        Ok(result.inserted_ids.len() as u64)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.sales.count_documents(doc! {}).await?)
    }
}
