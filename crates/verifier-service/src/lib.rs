//! Verification Service
//!
//! HTTP surface over the attestation verifier core. Callers submit a
//! (subject id, value, signature) triple obtained from the oracle signer;
//! the service authenticates it against the pinned oracle key, applies the
//! threshold predicate, and on success appends the subject id to the
//! append-only event log.
//!
//! ## Endpoints
//!
//! - `POST /api/verify` - verify a signed attestation
//! - `GET /api/events` - the event log in append order
//! - `GET /health` - health check

pub mod config;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use attest_verifier::Verifier;

/// Application state shared across handlers
pub struct AppState {
    /// The initialized verifier
    pub verifier: Verifier,
}

impl AppState {
    /// Create new application state
    pub fn new(verifier: Verifier) -> Self {
        Self { verifier }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/verify", post(handlers::verify_handler))
        .route("/api/events", get(handlers::events_handler))
        .with_state(shared_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
