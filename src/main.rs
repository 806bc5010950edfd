//! Backoffice - Application Entry Point
//!
//! This is the main entry point for the admin dashboard server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backoffice::{
    config::{Config, LogFormat, StoreBackend, CONFIG},
    db::{self, Store},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&CONFIG);

    tracing::info!("Starting backoffice server...");

    let store = open_store(&CONFIG).await?;
    tracing::info!(store = store.backend_name(), "Record store ready");

    // Create application state
    let state = AppState::new(store, CONFIG.clone());

    // Build the router
    let app = backoffice::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Pick the store backend from configuration
async fn open_store(config: &Config) -> anyhow::Result<Store> {
    if config.database.backend == StoreBackend::Memory {
        tracing::warn!("Using in-memory store; records are lost on restart");
        return Ok(Store::in_memory());
    }

    tracing::info!("Connecting to database...");
    let Some(pool) = db::create_pool(&config.database).await? else {
        tracing::warn!("DATABASE_URL is not set; every record operation will fail");
        return Ok(Store::disconnected());
    };

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    Ok(Store::postgres(pool))
}
