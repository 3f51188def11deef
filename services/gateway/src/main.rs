use std::sync::Arc;

use analytics::AnalyticsService;
use anyhow::Context;
use gateway::config::GatewayConfig;
use gateway::cors::build_cors_layer;
use gateway::router::create_router;
use gateway::state::AppState;
use persistence::MongoSalesStore;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Sales Analytics gateway");

    let config = GatewayConfig::from_env().context("invalid gateway configuration")?;

    // Storage handle lives for the whole process and is released on exit
    let store = Arc::new(MongoSalesStore::connect(&config.store).await?);
    let analytics = AnalyticsService::new(store.clone()).with_fetch_limit(config.fetch_limit);

    let app = create_router(AppState::new(analytics), build_cors_layer(&config.cors_origins));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match Arc::try_unwrap(store) {
        Ok(store) => store.shutdown().await,
        Err(_) => tracing::warn!("Storage handle still shared at shutdown; skipping explicit close"),
    }

    served?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
