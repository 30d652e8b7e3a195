//! Pipeline controller
//!
//! Drives one invocation through fetch → normalize → compare → diff →
//! notify → persist. The single invariant worth stating: once content has
//! been fetched and normalized successfully, the new snapshot is persisted
//! no matter how notification goes. A failed email must never cause the
//! same change to be detected (and re-sent) on the next run.

use chrono::Utc;

use crate::config::Config;
use crate::differ::{unified_diff, DEFAULT_MAX_DIFF_LINES};
use crate::error::WatchResult;
use crate::fetch::Fetcher;
use crate::normalizer::normalize;
use crate::notifier::{build_message, Notifier};
use crate::snapshot::{ChangeEvent, Snapshot};
use crate::store::FingerprintStore;

/// Terminal result of one successful pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// First run: state initialized, no notification sent
    Bootstrap,
    /// Content identical to the previous snapshot
    NoChange,
    /// Change detected and the alert was delivered
    ChangeNotified,
    /// Change detected and persisted, but the alert was not delivered
    NotifyFailed { detail: String },
}

/// Run the change-detection pipeline once for the configured target.
///
/// Fetch failures abort the run with the previous snapshot untouched, so
/// the next invocation retries against the same baseline. Persistence
/// failures surface as [`crate::error::WatchError::Persist`], distinct
/// from a notification failure which is folded into the outcome.
pub fn run_watch<F, N>(
    config: &Config,
    fetcher: &F,
    store: &FingerprintStore,
    notifier: &N,
) -> WatchResult<RunOutcome>
where
    F: Fetcher,
    N: Notifier,
{
    let raw_html = fetcher.fetch(&config.watch_url)?;
    let current = Snapshot::of(normalize(&raw_html));

    let previous = match store.load()? {
        None => {
            store.save(&current.text)?;
            return Ok(RunOutcome::Bootstrap);
        }
        Some(text) => Snapshot::of(text),
    };

    if previous.hash == current.hash {
        return Ok(RunOutcome::NoChange);
    }

    let diff = unified_diff(&previous.text, &current.text, DEFAULT_MAX_DIFF_LINES);
    let event = ChangeEvent {
        previous,
        current,
        diff,
    };

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let message = build_message(config, &event, &timestamp);
    let delivery = notifier.send(&message);

    // Persist before inspecting the delivery result: a failed email must
    // not leave the old snapshot in place.
    store.save(&event.current.text)?;

    match delivery {
        Ok(()) => Ok(RunOutcome::ChangeNotified),
        Err(e) => Ok(RunOutcome::NotifyFailed {
            detail: e.to_string(),
        }),
    }
}
