//! Lead Store Service
//!
//! REST API receiving leads from the landing page forms

use anyhow::{Context, Result};
use lead_store::{create_router, storage, AppState, Config, LeadRepository};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting Lead Store Service");
    info!("Storage backend: {}", config.storage_backend);
    info!("Listening on {}", config.address());

    let mut repository = storage::open(config.storage_backend, &config.redis_url)
        .await
        .context("Failed to initialize storage")?;
    repository
        .health_check()
        .await
        .context("Storage is not reachable")?;

    let app = create_router(AppState::new(repository));

    // Bind and serve
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    info!("Lead Store Service running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
