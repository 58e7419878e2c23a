//! The attestation verifier state machine
//!
//! The verification flow is:
//! 1. Reconstruct the signed message for the exact (subject id, value) pair
//! 2. Authenticate the signature against the trusted oracle key (expensive)
//! 3. Check the strict threshold predicate
//! 4. Append the subject id to the event log
//!
//! A failure at any step leaves the log untouched; there is no partial
//! success.

use attest_common::{
    signed_message, AttestationSignature, Error, OraclePublicKey, Result, VerificationEvent,
};
use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::event_log::EventLog;

/// Immutable trust anchor of a verifier instance
#[derive(Debug, Clone, Copy)]
pub struct VerifierConfig {
    /// The one oracle key trusted by this verifier
    pub oracle_public_key: OraclePublicKey,
    /// Values must be strictly below this to be eligible
    pub threshold: u64,
}

/// Gate-keeps the disclosure "this subject's value is below the threshold"
///
/// Starts uninitialized; [`Verifier::initialize`] installs the oracle key and
/// threshold exactly once, after which the verifier stays ready indefinitely.
/// The config is read lock-free on every call; only the log append
/// serializes.
pub struct Verifier {
    config: OnceCell<VerifierConfig>,
    log: Box<dyn EventLog>,
}

impl Verifier {
    /// Create an uninitialized verifier owning the given event log
    pub fn new(log: Box<dyn EventLog>) -> Self {
        Self {
            config: OnceCell::new(),
            log,
        }
    }

    /// One-time transition to the ready state
    ///
    /// A second call fails with `AlreadyInitialized` and leaves the stored
    /// key and threshold untouched. Letting the trusted key change after
    /// initialization would let an attacker substitute signatures.
    pub fn initialize(&self, config: VerifierConfig) -> Result<()> {
        // Reject malformed key bytes up front; they can never be replaced.
        config.oracle_public_key.verifying_key()?;

        let threshold = config.threshold;
        self.config
            .set(config)
            .map_err(|_| Error::AlreadyInitialized)?;

        info!(threshold, "verifier initialized");
        Ok(())
    }

    /// Whether the verifier has been initialized
    pub fn is_ready(&self) -> bool {
        self.config.get().is_some()
    }

    fn config(&self) -> Result<&VerifierConfig> {
        self.config.get().ok_or(Error::NotInitialized)
    }

    /// Verify one attestation and, on success, record the subject id
    ///
    /// The attested value is checked against the threshold but never stored,
    /// logged, or echoed.
    ///
    /// # Returns
    /// * `Ok(event)` - signature authentic and value strictly below threshold
    /// * `Err(Error::InvalidSignature)` - wrong signer, or tampered id/value
    /// * `Err(Error::ThresholdNotMet)` - authentic, but value not below threshold
    pub async fn verify(
        &self,
        subject_id: u64,
        value: u64,
        signature: &AttestationSignature,
    ) -> Result<VerificationEvent> {
        let config = self.config()?;

        // The signed message is the exact ordered pair; a signature over any
        // other encoding fails here.
        let message = signed_message(subject_id, value);

        let verifying_key = config.oracle_public_key.verifying_key()?;
        verifying_key
            .verify_strict(&message, &signature.signature())
            .map_err(|e| {
                warn!(subject_id, "attestation signature rejected");
                Error::InvalidSignature(e.to_string())
            })?;

        // Strict inequality: a value equal to the threshold is not eligible.
        if value >= config.threshold {
            debug!(subject_id, "attested value not below threshold");
            return Err(Error::ThresholdNotMet);
        }

        let event = VerificationEvent::new(subject_id);
        self.log.append(&event).await?;

        info!(subject_id, "attestation verified");
        Ok(event)
    }

    /// Read the event log in append order
    pub async fn events(&self) -> Result<Vec<VerificationEvent>> {
        self.log.read_all().await
    }
}
