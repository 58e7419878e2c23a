//! Integration tests for the oracle signer API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use ed25519_dalek::SigningKey;
use std::collections::HashMap;
use tower::ServiceExt; // for `oneshot`

use attest_common::{AttestationSignature, OraclePublicKey, SignedAttestation};
use attest_verifier::{MemoryEventLog, Verifier, VerifierConfig};
use oracle_signer::{create_router, AppState, OracleSigner, SalaryDirectory};

fn test_app(directory: SalaryDirectory) -> axum::Router {
    let signer = OracleSigner::new(SigningKey::from_bytes(&[9u8; 32]), directory);
    create_router(AppState::new(signer))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get(test_app(SalaryDirectory::seeded()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "oracle-signer");
}

#[tokio::test]
async fn test_attestation_has_the_documented_wire_shape() {
    let (status, json) = get(test_app(SalaryDirectory::seeded()), "/api/attestations/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["value"], 787);
    assert!(json["signature"].is_string());
    assert!(json["publicKey"].is_string());
}

#[tokio::test]
async fn test_attestation_verifies_end_to_end() {
    let (status, json) = get(test_app(SalaryDirectory::seeded()), "/api/attestations/1").await;
    assert_eq!(status, StatusCode::OK);

    let signed: SignedAttestation = serde_json::from_value(json).unwrap();
    let signature = AttestationSignature::from_hex(&signed.signature).unwrap();

    // Pin the key the oracle published and run the full verification path.
    let verifier = Verifier::new(Box::new(MemoryEventLog::new()));
    verifier
        .initialize(VerifierConfig {
            oracle_public_key: OraclePublicKey::from_hex(&signed.public_key).unwrap(),
            threshold: 165_000,
        })
        .unwrap();

    let event = verifier
        .verify(signed.data.id, signed.data.value, &signature)
        .await
        .unwrap();
    assert_eq!(event.subject_id, 1);
}

#[tokio::test]
async fn test_unknown_subject_without_fallback_is_404() {
    let directory = SalaryDirectory::new(HashMap::from([(1, 787)]), None);
    let (status, json) = get(test_app(directory), "/api/attestations/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("subject 5"));
}

#[tokio::test]
async fn test_unknown_subject_with_fallback_gets_default_value() {
    let (status, json) = get(test_app(SalaryDirectory::seeded()), "/api/attestations/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["value"], 536);
}
