//! Attestation verifier core
//!
//! Verifies oracle-signed (subject id, value) pairs and discloses only the
//! subject id of values that fall strictly below a configured threshold.
//! The verifier holds two pieces of persistent state: an immutable trust
//! anchor (oracle key + threshold, set once) and an append-only event log.

pub mod event_log;
pub mod verifier;

pub use event_log::{EventLog, MemoryEventLog, RedisEventLog};
pub use verifier::{Verifier, VerifierConfig};
