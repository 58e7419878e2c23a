//! Oracle Signer Service
//!
//! HTTP service that signs subject values on behalf of the oracle

use anyhow::{Context, Result};
use oracle_signer::{config::Config, create_router, AppState, OracleSigner};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oracle_signer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Oracle Signer Service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let signer = OracleSigner::new(config.signing_key(), config.directory.clone());

    // The out-of-band handoff: verifiers pin this key at initialization.
    info!("Oracle public key: {}", signer.public_key());

    let state = AppState::new(signer);
    let app = create_router(state);

    let listener = TcpListener::bind(&config.address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.address()))?;

    info!("Oracle Signer Service running on http://{}", config.address());

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
