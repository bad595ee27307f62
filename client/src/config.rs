//! Client Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat server API base URL. Without it orderings stay in memory.
    pub api_url: Option<Url>,

    /// Session token sent with API requests
    pub session_token: Option<String>,

    /// API request timeout (default: 10s)
    pub request_timeout: Duration,

    /// Emit logs as JSON (default: true)
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = non_empty_var("ROLEORDER_API_URL")
            .map(|v| Url::parse(&v).with_context(|| format!("ROLEORDER_API_URL is not a URL: {v}")))
            .transpose()?;
        let session_token = non_empty_var("ROLEORDER_SESSION_TOKEN");

        if api_url.is_some() && session_token.is_none() {
            bail!("ROLEORDER_SESSION_TOKEN must be set when ROLEORDER_API_URL is set");
        }

        Ok(Self {
            api_url,
            session_token,
            request_timeout: Duration::from_secs(
                env::var("ROLEORDER_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            log_json: env::var("ROLEORDER_LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }

    /// API base URL and session token, when orderings go to a remote API.
    #[must_use]
    pub fn remote_store(&self) -> Option<(&Url, &str)> {
        match (&self.api_url, &self.session_token) {
            (Some(api_url), Some(token)) => Some((api_url, token.as_str())),
            _ => None,
        }
    }

    /// Create a default configuration for testing (in-memory store).
    #[must_use]
    pub const fn default_for_test() -> Self {
        Self {
            api_url: None,
            session_token: None,
            request_timeout: Duration::from_secs(10),
            log_json: false,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
