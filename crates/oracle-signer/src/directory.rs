//! Deterministic subject-to-value lookup

use attest_common::{Error, Result};
use std::collections::HashMap;

/// Value returned for subjects without an explicit entry, unless the
/// fallback is disabled
pub const DEFAULT_FALLBACK_VALUE: u64 = 536;

/// The oracle's authoritative value table
///
/// A pure lookup: a given subject id always maps to the same value. Unknown
/// ids resolve to the fallback value when one is configured, and fail with
/// `UnknownSubject` otherwise.
#[derive(Debug, Clone)]
pub struct SalaryDirectory {
    entries: HashMap<u64, u64>,
    fallback: Option<u64>,
}

impl SalaryDirectory {
    /// Create a directory from explicit entries and an optional fallback
    pub fn new(entries: HashMap<u64, u64>, fallback: Option<u64>) -> Self {
        Self { entries, fallback }
    }

    /// The reference data set: subject 1 earns 787, everyone else falls
    /// back to 536
    pub fn seeded() -> Self {
        Self::new(Self::seeded_entries(), Some(DEFAULT_FALLBACK_VALUE))
    }

    /// Explicit entries of the reference data set
    pub fn seeded_entries() -> HashMap<u64, u64> {
        HashMap::from([(1, 787)])
    }

    /// Look up the value for a subject
    pub fn lookup(&self, subject_id: u64) -> Result<u64> {
        self.entries
            .get(&subject_id)
            .copied()
            .or(self.fallback)
            .ok_or(Error::UnknownSubject(subject_id))
    }

    /// Parse a directory spec of the form `"1:787,2:650"`
    pub fn parse_entries(spec: &str) -> Result<HashMap<u64, u64>> {
        let mut entries = HashMap::new();
        for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (id, value) = pair.split_once(':').ok_or_else(|| {
                Error::InvalidConfig(format!("directory entry '{}' is not id:value", pair))
            })?;
            let id: u64 = id.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("invalid subject id in entry '{}'", pair))
            })?;
            let value: u64 = value.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("invalid value in entry '{}'", pair))
            })?;
            entries.insert(id, value);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_deterministic() {
        let directory = SalaryDirectory::seeded();
        assert_eq!(directory.lookup(1).unwrap(), 787);
        assert_eq!(directory.lookup(1).unwrap(), 787);
        assert_eq!(directory.lookup(99).unwrap(), DEFAULT_FALLBACK_VALUE);
    }

    #[test]
    fn test_unknown_subject_without_fallback_fails() {
        let directory = SalaryDirectory::new(HashMap::from([(1, 787)]), None);
        assert!(matches!(
            directory.lookup(2),
            Err(Error::UnknownSubject(2))
        ));
    }

    #[test]
    fn test_parse_entries() {
        let entries = SalaryDirectory::parse_entries("1:787, 2:650").unwrap();
        assert_eq!(entries[&1], 787);
        assert_eq!(entries[&2], 650);
    }

    #[test]
    fn test_parse_entries_rejects_malformed_pairs() {
        assert!(SalaryDirectory::parse_entries("1=787").is_err());
        assert!(SalaryDirectory::parse_entries("one:787").is_err());
    }
}
