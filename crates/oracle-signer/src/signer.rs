//! Attestation signing

use attest_common::{Attestation, AttestationSignature, OraclePublicKey, Result, SignedAttestation};
use ed25519_dalek::{Signer, SigningKey};

use crate::directory::SalaryDirectory;

/// Signs attested (subject id, value) pairs with the oracle's long-lived key
///
/// The private key never leaves this struct; responses carry only the
/// corresponding public key, which verifiers pin at initialization time.
pub struct OracleSigner {
    signing_key: SigningKey,
    directory: SalaryDirectory,
}

impl OracleSigner {
    /// Create a signer from a signing key and a value directory
    pub fn new(signing_key: SigningKey, directory: SalaryDirectory) -> Self {
        Self {
            signing_key,
            directory,
        }
    }

    /// The public key verifiers should pin
    pub fn public_key(&self) -> OraclePublicKey {
        OraclePublicKey::from_signing_key(&self.signing_key)
    }

    /// Look up the subject's value and sign the exact ordered pair
    ///
    /// Pure function of the subject id, the oracle key, and the directory:
    /// the same id always yields byte-identical output.
    ///
    /// # Returns
    /// * `Ok(SignedAttestation)` - value found (or fallback applied) and signed
    /// * `Err(Error::UnknownSubject)` - no entry and no fallback configured
    pub fn attest(&self, subject_id: u64) -> Result<SignedAttestation> {
        let value = self.directory.lookup(subject_id)?;
        let data = Attestation::new(subject_id, value);
        let signature: AttestationSignature =
            self.signing_key.sign(&data.signed_message()).into();

        Ok(SignedAttestation {
            data,
            signature: signature.to_hex(),
            public_key: self.public_key().to_hex(),
        })
    }
}
