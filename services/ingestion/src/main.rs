use std::sync::Arc;

use anyhow::Context;
use ingestion::{IngestConfig, SalesLoader};
use persistence::MongoSalesStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = IngestConfig::from_env().context("invalid ingestion configuration")?;

    tracing::info!(source = %config.source.display(), "Starting sales ingestion");

    let store = Arc::new(MongoSalesStore::connect(&config.store).await?);
    let loader = SalesLoader::new(store.clone());
    let result = loader.ingest(&config.source).await;

    // Release the client whether or not the run succeeded
    drop(loader);
    if let Ok(store) = Arc::try_unwrap(store) {
        store.shutdown().await;
    }

    let inserted = result?;
    tracing::info!(inserted, "Ingestion complete");
    Ok(())
}
