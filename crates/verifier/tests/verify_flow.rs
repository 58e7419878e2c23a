//! End-to-end verification scenarios against the library

use attest_common::{signed_message, AttestationSignature, Error, OraclePublicKey};
use attest_verifier::{MemoryEventLog, Verifier, VerifierConfig};
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

const THRESHOLD: u64 = 165_000;

struct Fixture {
    oracle: SigningKey,
    verifier: Verifier,
}

fn fixture() -> Fixture {
    let oracle = SigningKey::generate(&mut OsRng);
    let verifier = Verifier::new(Box::new(MemoryEventLog::new()));
    verifier
        .initialize(VerifierConfig {
            oracle_public_key: OraclePublicKey::from_signing_key(&oracle),
            threshold: THRESHOLD,
        })
        .unwrap();
    Fixture { oracle, verifier }
}

fn sign(key: &SigningKey, subject_id: u64, value: u64) -> AttestationSignature {
    key.sign(&signed_message(subject_id, value)).into()
}

#[tokio::test]
async fn under_threshold_attestation_is_verified_and_logged() {
    let fx = fixture();

    let event = fx
        .verifier
        .verify(1, 787, &sign(&fx.oracle, 1, 787))
        .await
        .unwrap();
    assert_eq!(event.subject_id, 1);

    let events = fx.verifier.events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events.last().unwrap().subject_id, 1);
}

#[tokio::test]
async fn over_threshold_attestation_is_rejected_without_logging() {
    let fx = fixture();

    let result = fx
        .verifier
        .verify(1, 400_000, &sign(&fx.oracle, 1, 400_000))
        .await;
    assert!(matches!(result, Err(Error::ThresholdNotMet)));
    assert!(fx.verifier.events().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupted_signature_is_rejected_even_under_threshold() {
    let fx = fixture();

    let mut signature = sign(&fx.oracle, 1, 100_000);
    signature.0[5] ^= 0x01;

    let result = fx.verifier.verify(1, 100_000, &signature).await;
    assert!(matches!(result, Err(Error::InvalidSignature(_))));
    assert!(fx.verifier.events().await.unwrap().is_empty());
}

#[tokio::test]
async fn tampered_value_fails_authentication() {
    let fx = fixture();

    // Signed for 400_000, submitted as 787: the pair no longer matches.
    let signature = sign(&fx.oracle, 1, 400_000);
    let result = fx.verifier.verify(1, 787, &signature).await;
    assert!(matches!(result, Err(Error::InvalidSignature(_))));
}

#[tokio::test]
async fn tampered_subject_id_fails_authentication() {
    let fx = fixture();

    let signature = sign(&fx.oracle, 1, 787);
    let result = fx.verifier.verify(2, 787, &signature).await;
    assert!(matches!(result, Err(Error::InvalidSignature(_))));
}

#[tokio::test]
async fn signature_from_untrusted_oracle_is_rejected() {
    let fx = fixture();

    let impostor = SigningKey::generate(&mut OsRng);
    let result = fx
        .verifier
        .verify(1, 787, &sign(&impostor, 1, 787))
        .await;
    assert!(matches!(result, Err(Error::InvalidSignature(_))));
}

#[tokio::test]
async fn event_log_never_contains_the_attested_value() {
    let fx = fixture();

    // A value distinctive enough to grep for in the serialized log.
    let value = 123_457;
    fx.verifier
        .verify(9, value, &sign(&fx.oracle, 9, value))
        .await
        .unwrap();

    let events = fx.verifier.events().await.unwrap();
    let serialized = serde_json::to_string(&events).unwrap();
    assert!(!serialized.contains(&value.to_string()));
    assert!(serialized.contains("\"subjectId\":9"));
}

#[tokio::test]
async fn concurrent_verifications_all_land_in_the_log() {
    let fx = fixture();
    let verifier = std::sync::Arc::new(fx.verifier);

    let mut handles = Vec::new();
    for subject_id in 0..16u64 {
        let verifier = verifier.clone();
        let signature = sign(&fx.oracle, subject_id, 500);
        handles.push(tokio::spawn(async move {
            verifier.verify(subject_id, 500, &signature).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let events = verifier.events().await.unwrap();
    assert_eq!(events.len(), 16);
    let mut ids: Vec<u64> = events.iter().map(|e| e.subject_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..16).collect::<Vec<u64>>());
}
