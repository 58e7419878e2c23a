//! Configuration management for the oracle signer service
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{anyhow, Context, Result};
use ed25519_dalek::SigningKey;
use std::env;
use tracing::warn;

use crate::directory::{SalaryDirectory, DEFAULT_FALLBACK_VALUE};

/// Hardcoded development seed (RFC 8032 test vector)
///
/// Used only when `ORACLE_SIGNING_KEY` is unset; deployments must provide
/// their own key.
const DEV_SIGNING_KEY_HEX: &str =
    "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub host: String,

    /// API server port
    pub port: u16,

    /// Seed bytes of the oracle's Ed25519 signing key
    pub signing_key_seed: [u8; 32],

    /// The subject-to-value table served by this oracle
    pub directory: SalaryDirectory,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// - `ORACLE_HOST` / `ORACLE_PORT` - bind address (default 0.0.0.0:8081)
    /// - `ORACLE_SIGNING_KEY` - hex-encoded 32-byte key seed
    /// - `ORACLE_DIRECTORY` - explicit entries as `"1:787,2:650"`
    /// - `ORACLE_FALLBACK_VALUE` - value for unknown subjects, or `none` to
    ///   make unknown subjects fail with a lookup error
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let host = env::var("ORACLE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("ORACLE_PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse()
            .context("ORACLE_PORT must be a number")?;

        let signing_key_seed = match env::var("ORACLE_SIGNING_KEY") {
            Ok(hex_seed) => decode_seed(&hex_seed)?,
            Err(_) => {
                warn!("ORACLE_SIGNING_KEY not set, falling back to the development key");
                decode_seed(DEV_SIGNING_KEY_HEX)?
            }
        };

        let fallback = match env::var("ORACLE_FALLBACK_VALUE") {
            Ok(v) if v.eq_ignore_ascii_case("none") => None,
            Ok(v) => Some(
                v.parse()
                    .context("ORACLE_FALLBACK_VALUE must be a number or 'none'")?,
            ),
            Err(_) => Some(DEFAULT_FALLBACK_VALUE),
        };

        let entries = match env::var("ORACLE_DIRECTORY") {
            Ok(spec) => SalaryDirectory::parse_entries(&spec)?,
            Err(_) => SalaryDirectory::seeded_entries(),
        };
        let directory = SalaryDirectory::new(entries, fallback);

        Ok(Self {
            host,
            port,
            signing_key_seed,
            directory,
        })
    }

    /// The address to bind the HTTP server to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The oracle's signing key
    pub fn signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.signing_key_seed)
    }
}

fn decode_seed(hex_seed: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(hex_seed).context("ORACLE_SIGNING_KEY must be hex")?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("ORACLE_SIGNING_KEY must encode exactly 32 bytes"))
}
