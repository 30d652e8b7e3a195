//! pagewatch - single page change detection and email alerting
//!
//! Pagewatch fetches one web page, reduces it to stable visible text,
//! compares it against the previously persisted snapshot, and emails a
//! bounded unified diff when the content changed. State lives in a
//! per-target directory, so independent watchers never interfere; an
//! external scheduler (cron) drives repeated invocations.

pub mod config;
pub mod differ;
pub mod error;
pub mod fetch;
pub mod normalizer;
pub mod notifier;
pub mod pipeline;
pub mod snapshot;
pub mod store;

// Re-exports for convenience
pub use config::{Config, ConfigOverrides};
pub use differ::{unified_diff, DEFAULT_MAX_DIFF_LINES, TRUNCATION_MARKER};
pub use error::{WatchError, WatchResult};
pub use fetch::{Fetcher, HttpFetcher};
pub use normalizer::normalize;
pub use notifier::{build_message, EmailMessage, Notifier, ResendNotifier};
pub use pipeline::{run_watch, RunOutcome};
pub use snapshot::{ChangeEvent, Snapshot};
pub use store::FingerprintStore;
