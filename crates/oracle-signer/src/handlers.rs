//! API request handlers for the oracle signer

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

use attest_common::{Error, SignedAttestation};

use crate::AppState;

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::UnknownSubject(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "oracle-signer"
    }))
}

/// Look up a subject's value and return the signed attestation
pub async fn attestation_handler(
    State(state): State<Arc<AppState>>,
    Path(subject_id): Path<u64>,
) -> Result<Json<SignedAttestation>, ApiError> {
    let signed = state.signer.attest(subject_id)?;
    info!(subject_id, "issued signed attestation");
    Ok(Json(signed))
}
