//! Snapshot data model
//!
//! A snapshot is the normalized text of the watched page plus its SHA-256
//! content hash. Hash equality is the change-detection criterion; the hash
//! is never used for anything security-sensitive.

use sha2::{Digest, Sha256};

/// Normalized page text plus its content hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Canonical visible text of the page
    pub text: String,
    /// Lowercase hex SHA-256 of the UTF-8 text
    pub hash: String,
}

impl Snapshot {
    /// Build a snapshot, computing the content hash of `text`
    pub fn of(text: impl Into<String>) -> Self {
        let text = text.into();
        let hash = sha256_hex(&text);
        Self { text, hash }
    }
}

/// A detected change within one invocation; never persisted
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub previous: Snapshot,
    pub current: Snapshot,
    /// Bounded unified diff between `previous` and `current`
    pub diff: String,
}

/// Lowercase hex SHA-256 of a UTF-8 string
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_vector() {
        // sha256("Hello")
        assert_eq!(
            sha256_hex("Hello"),
            "185f8db32271fe25f561a6fc938b2e264306ec304eda518007d1764826381969"
        );
    }

    #[test]
    fn test_snapshot_equality_tracks_hash() {
        let a = Snapshot::of("Hello\nWorld");
        let b = Snapshot::of("Hello\nWorld");
        let c = Snapshot::of("Hello");

        assert_eq!(a.hash, b.hash);
        assert_ne!(a.hash, c.hash);
    }
}
