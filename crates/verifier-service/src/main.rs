//! Verification Service
//!
//! HTTP API for verifying oracle-signed attestations against a threshold

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attest_verifier::{EventLog, MemoryEventLog, RedisEventLog, Verifier, VerifierConfig};
use verifier_service::{config::Config, create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verifier_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Verification Service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Trusted oracle key: {}", config.oracle_public_key);
    info!("Threshold: {}", config.threshold);

    // Select the event log backend
    let log: Box<dyn EventLog> = match &config.redis_url {
        Some(url) => Box::new(
            RedisEventLog::connect(url)
                .await
                .context("Failed to connect the Redis event log")?,
        ),
        None => {
            warn!("REDIS_URL not set, using the in-memory event log; events will not survive a restart");
            Box::new(MemoryEventLog::new())
        }
    };

    // One-shot initialization: the trusted key and threshold cannot change
    // for the lifetime of this instance.
    let verifier = Verifier::new(log);
    verifier
        .initialize(VerifierConfig {
            oracle_public_key: config.oracle_public_key,
            threshold: config.threshold,
        })
        .context("Failed to initialize verifier")?;

    let state = AppState::new(verifier);
    let app = create_router(state);

    let listener = TcpListener::bind(&config.address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.address()))?;

    info!("Verification Service running on http://{}", config.address());

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
