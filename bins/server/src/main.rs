//! Tally API Server
//!
//! Main entry point for the Tally bookkeeping service.

use std::path::Path;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_api::{AppState, config::AppConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create application state: one bookkeeping instance for the whole
    // process, owned here and handed to the router.
    let state = AppState::new();

    // Create router
    let app = create_router(state, Path::new(&config.server.public_dir));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Tally bookkeeping service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
