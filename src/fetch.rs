//! Page retrieval adapter
//!
//! The [`Fetcher`] trait is the seam between the pipeline and the HTTP
//! transport; tests substitute in-memory doubles, production uses
//! [`HttpFetcher`] over a blocking reqwest client.

use std::time::Duration;

use crate::error::{WatchError, WatchResult};

/// Retrieves the raw markup of a watched page
pub trait Fetcher {
    /// Fetch `url`, returning the response body as text.
    ///
    /// Transport failures, timeouts, and non-2xx statuses are all
    /// [`WatchError::Fetch`].
    fn fetch(&self, url: &str) -> WatchResult<String>;
}

/// Blocking HTTP fetcher with a per-request timeout and optional custom
/// User-Agent
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher honoring `timeout` on every request
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder().timeout(timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent.to_string());
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> WatchResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|source| WatchError::Fetch {
                url: url.to_string(),
                source,
            })?;

        response.text().map_err(|source| WatchError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}
