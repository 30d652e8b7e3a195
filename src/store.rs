//! Fingerprint store
//!
//! File-backed persistence of the last-seen normalized text for one watch
//! target. Two artifacts live in the target's state directory:
//! `previous.txt` (the normalized text, authoritative) and
//! `previous.sha256` (its content hash, advisory only - correctness always
//! recomputes from the text). The layout is an implementation detail of
//! the `load`/`save` contract and can be swapped for any durable store
//! with read-after-write consistency per target.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WatchError, WatchResult};
use crate::snapshot::sha256_hex;

const TEXT_FILE: &str = "previous.txt";
const HASH_FILE: &str = "previous.sha256";

/// Persisted snapshot storage for a single watch target
#[derive(Debug, Clone)]
pub struct FingerprintStore {
    dir: PathBuf,
}

impl FingerprintStore {
    /// Bind a store to the given state directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The state directory this store reads and writes
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the previously persisted normalized text.
    ///
    /// Returns `None` when no snapshot exists yet (first run). Read
    /// failures other than a missing file are surfaced as errors.
    pub fn load(&self) -> WatchResult<Option<String>> {
        match fs::read_to_string(self.dir.join(TEXT_FILE)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WatchError::Io(e)),
        }
    }

    /// Durably persist `text` as the new previous-state, overwriting any
    /// prior value. Creates the state directory if missing.
    ///
    /// Failures are surfaced as [`WatchError::Persist`] so the caller can
    /// treat them distinctly: a lost write here risks re-notifying the
    /// same change on every subsequent run.
    pub fn save(&self, text: &str) -> WatchResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| WatchError::Persist {
            path: self.dir.clone(),
            source,
        })?;

        let text_path = self.dir.join(TEXT_FILE);
        fs::write(&text_path, text).map_err(|source| WatchError::Persist {
            path: text_path.clone(),
            source,
        })?;

        let hash_path = self.dir.join(HASH_FILE);
        fs::write(&hash_path, sha256_hex(text)).map_err(|source| WatchError::Persist {
            path: hash_path.clone(),
            source,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_returns_none_before_first_save() {
        let dir = tempdir().unwrap();
        let store = FingerprintStore::new(dir.path().join("state"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_creates_directory_and_roundtrips() {
        let dir = tempdir().unwrap();
        let store = FingerprintStore::new(dir.path().join("nested/state"));

        store.save("Hello\nWorld").unwrap();
        assert_eq!(store.load().unwrap(), Some("Hello\nWorld".to_string()));
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let store = FingerprintStore::new(dir.path());

        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_save_writes_advisory_hash_file() {
        let dir = tempdir().unwrap();
        let store = FingerprintStore::new(dir.path());

        store.save("Hello").unwrap();
        let recorded = fs::read_to_string(dir.path().join(HASH_FILE)).unwrap();
        assert_eq!(recorded, sha256_hex("Hello"));
    }

    #[test]
    fn test_uncreatable_directory_is_a_persist_error() {
        let dir = tempdir().unwrap();

        // A plain file occupies the state directory path.
        let blocked = dir.path().join("state");
        fs::write(&blocked, "not a directory").unwrap();

        let store = FingerprintStore::new(&blocked);
        let err = store.save("Hello").unwrap_err();
        assert!(matches!(err, WatchError::Persist { .. }));
    }
}
