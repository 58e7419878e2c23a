pub mod attestation;
pub mod error;
pub mod keys;

pub use attestation::{signed_message, Attestation, SignedAttestation, VerificationEvent};
pub use error::{Error, Result};
pub use keys::{AttestationSignature, OraclePublicKey};
