//! Oracle Signer Service
//!
//! The authoritative source of subject values: given a subject id, the
//! service deterministically looks up the associated value and returns it
//! together with an Ed25519 signature over the exact (id, value) pair. The
//! signing key stays inside the service; callers and verifiers see only the
//! public key.
//!
//! ## Endpoints
//!
//! - `GET /api/attestations/{subject_id}` - signed attestation for a subject
//! - `GET /health` - health check

pub mod config;
pub mod directory;
pub mod handlers;
pub mod signer;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use directory::SalaryDirectory;
pub use signer::OracleSigner;

/// Application state shared across handlers
pub struct AppState {
    /// The oracle's signer
    pub signer: OracleSigner,
}

impl AppState {
    /// Create new application state
    pub fn new(signer: OracleSigner) -> Self {
        Self { signer }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/api/attestations/{subject_id}",
            get(handlers::attestation_handler),
        )
        .with_state(shared_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
