use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fleet_api::{AppState, create_router};
use fleet_common::{AppConfig, RecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fleet_api=info,fleet_common=info,tower_http=info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fleet API service");

    let config = AppConfig::from_env()?;
    info!(?config, "Loaded configuration");

    let policy = config.session_policy();
    let store = if config.seed_demo_data {
        RecordStore::seeded(policy).await?
    } else {
        RecordStore::new(policy)
    };

    let bind_address = config.bind_address();
    let app = create_router(AppState::new(store, config));

    let listener = TcpListener::bind(&bind_address).await?;
    info!("Fleet API service listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Fleet API service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
