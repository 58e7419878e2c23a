use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the signed message: two u64 fields
pub const SIGNED_MESSAGE_LEN: usize = 16;

/// The attested (subject id, value) pair
///
/// Transient: created per attestation request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Subject identifier known to the oracle
    pub id: u64,
    /// The value the oracle vouches for
    pub value: u64,
}

impl Attestation {
    /// Create a new attested pair
    pub fn new(id: u64, value: u64) -> Self {
        Self { id, value }
    }

    /// The exact message the oracle signs for this pair
    pub fn signed_message(&self) -> [u8; SIGNED_MESSAGE_LEN] {
        signed_message(self.id, self.value)
    }
}

/// Build the signed message for an attested pair
///
/// Normative encoding, shared by signer and verifier: the ordered pair as
/// 16 bytes, `subject_id` then `value`, both u64 big-endian. Signatures over
/// any other layout must fail authentication.
pub fn signed_message(subject_id: u64, value: u64) -> [u8; SIGNED_MESSAGE_LEN] {
    let mut message = [0u8; SIGNED_MESSAGE_LEN];
    message[..8].copy_from_slice(&subject_id.to_be_bytes());
    message[8..].copy_from_slice(&value.to_be_bytes());
    message
}

/// Wire payload returned by the oracle's query-by-id endpoint
///
/// `signature` and `public_key` are hex strings; serializes as
/// `{"data":{"id":N,"value":N},"signature":"..","publicKey":".."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedAttestation {
    pub data: Attestation,
    /// Hex-encoded Ed25519 signature over [`Attestation::signed_message`]
    pub signature: String,
    /// Hex-encoded Ed25519 key the signature verifies under
    pub public_key: String,
}

/// The only persisted output of a successful verification
///
/// Records that some value satisfying the threshold predicate existed for
/// this subject. The value itself is never stored here; that is the core
/// privacy property of the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationEvent {
    /// Subject whose attested value passed the predicate
    pub subject_id: u64,
    /// When the verifier appended this event
    pub recorded_at: DateTime<Utc>,
}

impl VerificationEvent {
    /// Create an event stamped with the current time
    pub fn new(subject_id: u64) -> Self {
        Self {
            subject_id,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_message_layout() {
        let message = signed_message(1, 787);
        assert_eq!(&message[..8], &1u64.to_be_bytes());
        assert_eq!(&message[8..], &787u64.to_be_bytes());
    }

    #[test]
    fn test_signed_message_is_order_sensitive() {
        // Swapping the pair must change the message, or signatures would be
        // malleable across orderings.
        assert_ne!(signed_message(1, 787), signed_message(787, 1));
    }

    #[test]
    fn test_signed_attestation_wire_shape() {
        let signed = SignedAttestation {
            data: Attestation::new(1, 787),
            signature: "00".repeat(64),
            public_key: "11".repeat(32),
        };
        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["data"]["value"], 787);
        assert!(json["publicKey"].is_string());
    }

    #[test]
    fn test_event_serializes_without_value() {
        let event = VerificationEvent::new(42);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["subjectId"], 42);
        assert!(json.get("value").is_none());
    }
}
