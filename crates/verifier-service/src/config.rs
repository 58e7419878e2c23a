//! Configuration management for the verification service
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use attest_common::OraclePublicKey;
use std::env;

/// Threshold applied when `THRESHOLD` is unset
pub const DEFAULT_THRESHOLD: u64 = 165_000;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub host: String,

    /// API server port
    pub port: u16,

    /// The oracle key this verifier trusts, shared out-of-band
    pub oracle_public_key: OraclePublicKey,

    /// Attested values must be strictly below this
    pub threshold: u64,

    /// Redis URL for the event log; in-memory log when unset
    pub redis_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `ORACLE_PUBLIC_KEY` (hex) is required; `THRESHOLD` defaults to
    /// 165000; `REDIS_URL` is optional.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let host = env::var("VERIFIER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("VERIFIER_PORT")
            .unwrap_or_else(|_| "8082".to_string())
            .parse()
            .context("VERIFIER_PORT must be a number")?;

        let oracle_public_key_hex =
            env::var("ORACLE_PUBLIC_KEY").context("ORACLE_PUBLIC_KEY must be set")?;
        let oracle_public_key = OraclePublicKey::from_hex(&oracle_public_key_hex)
            .context("ORACLE_PUBLIC_KEY must be a hex-encoded 32-byte key")?;

        let threshold = match env::var("THRESHOLD") {
            Ok(v) => v.parse().context("THRESHOLD must be a number")?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        let redis_url = env::var("REDIS_URL").ok();

        Ok(Self {
            host,
            port,
            oracle_public_key,
            threshold,
            redis_url,
        })
    }

    /// The address to bind the HTTP server to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
