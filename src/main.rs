//! pagewatch CLI - watch one web page and email a diff when it changes
//!
//! Usage: pagewatch [OPTIONS]
//!
//! Credentials and addressing come from the environment (RESEND_API_KEY,
//! TO_EMAIL, FROM_EMAIL); everything else may be overridden by flags.
//!
//! Exit codes:
//!   0  no change, bootstrap, or change notified
//!   1  fetch failure (state untouched)
//!   2  missing configuration
//!   3  change detected but notification failed (degraded)
//!   4  persistence failure

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use pagewatch::{
    run_watch, Config, ConfigOverrides, FingerprintStore, HttpFetcher, ResendNotifier,
    RunOutcome, WatchError, WatchResult,
};

/// pagewatch - single page change detection and email alerting
#[derive(Parser, Debug)]
#[command(name = "pagewatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to watch (overrides WATCH_URL)
    #[arg(long)]
    url: Option<String>,

    /// State directory for this target (overrides STATE_DIR)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// HTTP timeout in seconds (overrides REQUEST_TIMEOUT)
    #[arg(long)]
    timeout: Option<u64>,

    /// Email subject prefix (overrides SUBJECT_PREFIX)
    #[arg(long)]
    subject_prefix: Option<String>,

    /// Custom User-Agent for the fetch (overrides USER_AGENT)
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::resolve(ConfigOverrides {
        url: cli.url,
        state_dir: cli.state_dir,
        timeout_secs: cli.timeout,
        subject_prefix: cli.subject_prefix,
        user_agent: cli.user_agent,
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(RunOutcome::Bootstrap) => {
            status(&format!("Initialized state for {}", config.watch_url));
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoChange) => {
            status(&format!("No change for {}", config.watch_url));
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::ChangeNotified) => {
            status(&format!("Change notified for {}", config.watch_url));
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NotifyFailed { detail }) => {
            eprintln!(
                "ERROR: change on {} persisted, but notification failed: {detail}",
                config.watch_url
            );
            ExitCode::from(3)
        }
        Err(e @ WatchError::Fetch { .. }) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(1)
        }
        Err(e @ (WatchError::Persist { .. } | WatchError::Io(_))) => {
            eprintln!("ERROR: {} (target {})", e, config.watch_url);
            ExitCode::from(4)
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(config: &Config) -> WatchResult<RunOutcome> {
    let fetcher = HttpFetcher::new(config.timeout, config.user_agent.as_deref())
        .map_err(|source| WatchError::Fetch {
            url: config.watch_url.clone(),
            source,
        })?;
    let notifier =
        ResendNotifier::new(&config.resend_api_key, config.timeout).map_err(|e| {
            WatchError::Notify {
                detail: e.to_string(),
            }
        })?;
    let store = FingerprintStore::new(&config.state_dir);

    run_watch(config, &fetcher, &store, &notifier)
}

fn status(message: &str) {
    println!("[{}] {message}", Utc::now().format("%Y-%m-%dT%H:%M:%SZ"));
}
