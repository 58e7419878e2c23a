use ed25519_dalek::{Signature, SigningKey, VerifyingKey};
use std::fmt;

use crate::error::{Error, Result};

/// The oracle's Ed25519 verifying key
///
/// This is the verifier's trust anchor: exactly one oracle key is trusted per
/// verifier instance, shared out-of-band at initialization time. The textual
/// encoding used on every wire surface is lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OraclePublicKey(pub [u8; 32]);

impl OraclePublicKey {
    /// Create from raw key bytes
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Capture the public half of a signing key
    pub fn from_signing_key(key: &SigningKey) -> Self {
        Self(key.verifying_key().to_bytes())
    }

    /// Get the inner bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hexadecimal string
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidKey(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidKey(format!("expected 32 bytes, got {}", bytes.len())))?;
        Ok(Self(arr))
    }

    /// Decompress into a dalek verifying key
    ///
    /// Fails with `InvalidKey` if the bytes are not a valid curve point.
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        VerifyingKey::from_bytes(&self.0).map_err(|e| Error::InvalidKey(e.to_string()))
    }
}

impl fmt::Display for OraclePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// An Ed25519 signature over a signed attestation message
///
/// Carried as hex on the wire, raw bytes internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttestationSignature(pub [u8; 64]);

impl AttestationSignature {
    /// Create from raw signature bytes
    pub fn new(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the inner bytes
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hexadecimal string
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidSignature(e.to_string()))?;
        let arr: [u8; 64] = bytes.as_slice().try_into().map_err(|_| {
            Error::InvalidSignature(format!("expected 64 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// View as a dalek signature
    pub fn signature(&self) -> Signature {
        Signature::from_bytes(&self.0)
    }
}

impl From<Signature> for AttestationSignature {
    fn from(signature: Signature) -> Self {
        Self(signature.to_bytes())
    }
}

impl fmt::Display for AttestationSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
