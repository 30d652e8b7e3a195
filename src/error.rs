//! Error types for pagewatch
//!
//! Uses `thiserror` for library errors. Normalization and comparison are
//! total functions and have no variants here; only configuration and the
//! I/O-touching stages can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagewatch operations
pub type WatchResult<T> = Result<T, WatchError>;

/// Main error type for pagewatch operations
#[derive(Error, Debug)]
pub enum WatchError {
    /// Required configuration value is absent; fatal before any network call
    #[error("missing required configuration: {var}")]
    MissingConfig { var: String },

    /// Fetching the watched page failed (network, timeout, or non-2xx status)
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The notification provider rejected the message or was unreachable
    #[error("notification failed: {detail}")]
    Notify { detail: String },

    /// Writing the new snapshot failed; next run may re-notify the same change
    #[error("failed to persist state at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error outside the persistence write path
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
