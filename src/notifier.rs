//! Email notification adapter
//!
//! Formats a change event into a Resend message (HTML plus plain-text
//! fallback) and delivers it over one blocking POST. Delivery failure is
//! an explicit result inspected by the pipeline - never a control-flow
//! short-circuit - so the mandatory persistence step cannot be skipped.
//! Retries, if wanted, belong to the external scheduler across runs.

use serde::Serialize;

use crate::config::Config;
use crate::error::{WatchError, WatchResult};
use crate::snapshot::ChangeEvent;

/// Resend transactional email endpoint
pub const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// JSON payload accepted by the Resend API
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Delivers a formatted message to the notification transport
pub trait Notifier {
    /// Send `message`, treating any non-success provider response as an
    /// error carrying the provider's detail.
    fn send(&self, message: &EmailMessage) -> WatchResult<()>;
}

/// Build the alert email for a detected change.
///
/// The diff, URL, and timestamp are HTML-escaped in the rich body; the
/// plain-text fallback carries them verbatim.
pub fn build_message(config: &Config, event: &ChangeEvent, timestamp: &str) -> EmailMessage {
    let subject = format!("{} Change detected @ {}", config.subject_prefix, timestamp);

    let url_attr = html_escape::encode_double_quoted_attribute(&config.watch_url);
    let url_text = html_escape::encode_text(&config.watch_url);
    let ts_text = html_escape::encode_text(timestamp);
    let diff_html = html_escape::encode_text(&event.diff);

    let html = format!(
        concat!(
            "<div>\n",
            "  <p>Change detected on <a href=\"{url_attr}\">{url_text}</a> at {ts}.</p>\n",
            "  <p><strong>Unified diff</strong> (previous → current):</p>\n",
            "  <pre style=\"white-space:pre-wrap; word-wrap:break-word;\">{diff}</pre>\n",
            "</div>",
        ),
        url_attr = url_attr,
        url_text = url_text,
        ts = ts_text,
        diff = diff_html,
    );

    let text = format!(
        "Change detected on {} at {}.\n\nUnified diff (previous → current):\n\n{}",
        config.watch_url, timestamp, event.diff,
    );

    EmailMessage {
        from: config.from_email.clone(),
        to: config.to_emails.clone(),
        subject,
        html,
        text: Some(text),
    }
}

/// Notifier backed by the Resend HTTP API
#[derive(Debug, Clone)]
pub struct ResendNotifier {
    api_key: String,
    client: reqwest::blocking::Client,
}

impl ResendNotifier {
    /// Build a notifier with `timeout` applied to the delivery call
    pub fn new(
        api_key: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            api_key: api_key.into(),
            client,
        })
    }
}

impl Notifier for ResendNotifier {
    fn send(&self, message: &EmailMessage) -> WatchResult<()> {
        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .map_err(|e| WatchError::Notify {
                detail: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| WatchError::Notify {
            detail: format!("unreadable provider response: {e}"),
        })?;

        if status.as_u16() >= 300 {
            return Err(WatchError::Notify {
                detail: format!("provider returned {status}: {body}"),
            });
        }

        // A 2xx with an unparsable body still counts as a failure; we
        // cannot confirm the provider accepted the message.
        serde_json::from_str::<serde_json::Value>(&body).map_err(|e| WatchError::Notify {
            detail: format!("malformed provider response: {e}"),
        })?;

        Ok(())
    }
}
