//! API request handlers for attestation verification

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use attest_common::{AttestationSignature, Error, VerificationEvent};

use crate::AppState;

/// Request to verify a signed attestation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Subject the attestation is about
    pub subject_id: u64,

    /// The attested value; checked, never stored
    pub value: u64,

    /// Hex-encoded Ed25519 signature over the (subjectId, value) pair
    pub signature: String,
}

/// Response from a successful verification
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub verified: bool,
    pub subject_id: u64,
}

/// The event log in append order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub events: Vec<VerificationEvent>,
    pub total: usize,
}

/// API error type with a machine-readable reason
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub reason: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message,
            "reason": self.reason,
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (status, reason) = match &err {
            Error::InvalidSignature(_) => (StatusCode::FORBIDDEN, "invalid_signature"),
            Error::ThresholdNotMet => (StatusCode::FORBIDDEN, "threshold_not_met"),
            Error::NotInitialized => (StatusCode::SERVICE_UNAVAILABLE, "not_ready"),
            Error::EventLog(_) => (StatusCode::INTERNAL_SERVER_ERROR, "event_log"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        ApiError {
            status,
            reason,
            message: err.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "verifier-service"
    }))
}

/// Verify a signed attestation
///
/// On success the subject id is appended to the event log; the value never
/// appears in any response or log record.
pub async fn verify_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let signature = AttestationSignature::from_hex(&payload.signature).map_err(|e| ApiError {
        status: StatusCode::BAD_REQUEST,
        reason: "malformed_signature",
        message: e.to_string(),
    })?;

    let event = state
        .verifier
        .verify(payload.subject_id, payload.value, &signature)
        .await?;

    info!(subject_id = event.subject_id, "verification recorded");

    Ok(Json(VerifyResponse {
        verified: true,
        subject_id: event.subject_id,
    }))
}

/// Read the verification event log
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventsResponse>, ApiError> {
    let events = state.verifier.events().await?;
    let total = events.len();
    Ok(Json(EventsResponse { events, total }))
}
