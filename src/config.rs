//! Configuration module for pagewatch
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables
//! 3. Built-in defaults (lowest priority)
//!
//! Credentials and addressing (`RESEND_API_KEY`, `TO_EMAIL`, `FROM_EMAIL`)
//! come from the environment only; they are never accepted on the command
//! line. The config is built once at startup and passed by reference into
//! the pipeline - no ambient global state.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{WatchError, WatchResult};

/// Default state directory, relative to the working directory
pub const DEFAULT_STATE_DIR: &str = ".watch_state";

/// Default HTTP timeout in seconds for both fetch and notification calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Default email subject prefix
pub const DEFAULT_SUBJECT_PREFIX: &str = "[Page Watch]";

/// Resolved process configuration for one watch target
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the page under watch
    pub watch_url: String,
    /// Bearer token for the Resend API
    pub resend_api_key: String,
    /// Alert recipients (parsed from a comma-separated list)
    pub to_emails: Vec<String>,
    /// Verified sender identity
    pub from_email: String,
    /// Directory holding the persisted snapshot for this target
    pub state_dir: PathBuf,
    /// Timeout applied to each outbound HTTP call
    pub timeout: Duration,
    /// Prefix prepended to the email subject
    pub subject_prefix: String,
    /// Optional custom User-Agent for the fetch
    pub user_agent: Option<String>,
}

/// CLI-provided overrides applied on top of the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub state_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub subject_prefix: Option<String>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment alone
    pub fn from_env() -> WatchResult<Self> {
        Self::resolve(ConfigOverrides::default())
    }

    /// Resolve configuration from overrides layered over the environment
    pub fn resolve(overrides: ConfigOverrides) -> WatchResult<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> WatchResult<Self> {
        let watch_url = overrides
            .url
            .or_else(|| env("WATCH_URL"))
            .ok_or_else(|| missing("WATCH_URL"))?;

        let resend_api_key = env("RESEND_API_KEY").ok_or_else(|| missing("RESEND_API_KEY"))?;
        let from_email = env("FROM_EMAIL").ok_or_else(|| missing("FROM_EMAIL"))?;

        let to_emails = parse_recipients(&env("TO_EMAIL").ok_or_else(|| missing("TO_EMAIL"))?);
        if to_emails.is_empty() {
            return Err(missing("TO_EMAIL"));
        }

        let state_dir = overrides
            .state_dir
            .or_else(|| env("STATE_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR));

        // An unparsable REQUEST_TIMEOUT falls back to the default rather
        // than aborting an unattended run.
        let timeout_secs = overrides
            .timeout_secs
            .or_else(|| env("REQUEST_TIMEOUT").and_then(|v| v.trim().parse().ok()))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let subject_prefix = overrides
            .subject_prefix
            .or_else(|| env("SUBJECT_PREFIX"))
            .unwrap_or_else(|| DEFAULT_SUBJECT_PREFIX.to_string());

        let user_agent = overrides.user_agent.or_else(|| env("USER_AGENT"));

        Ok(Self {
            watch_url,
            resend_api_key,
            to_emails,
            from_email,
            state_dir,
            timeout: Duration::from_secs(timeout_secs),
            subject_prefix,
            user_agent,
        })
    }
}

fn missing(var: &str) -> WatchError {
    WatchError::MissingConfig {
        var: var.to_string(),
    }
}

/// Split a comma-separated recipient list, trimming entries and dropping
/// empty ones
fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
