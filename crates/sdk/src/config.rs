//! Client Configuration

use crate::error::{LbryError, Result};
use std::time::Duration;

/// Default daemon API endpoint
pub const DEFAULT_API_URL: &str = "http://localhost:5279/lbryapi";

/// Environment variable overriding the API endpoint
pub const API_URL_ENV: &str = "LBRY_API_URL";

/// Environment variable setting a transport timeout in seconds
pub const API_TIMEOUT_ENV: &str = "LBRY_API_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL requests are posted to
    pub base_url: String,

    /// Transport timeout. `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `url`, no timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            base_url: url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// - `LBRY_API_URL`: API endpoint (default: `http://localhost:5279/lbryapi`)
    /// - `LBRY_API_TIMEOUT_SECS`: transport timeout in seconds (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(API_URL_ENV)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = lookup(API_TIMEOUT_ENV)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            base_url,
            request_timeout,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Reject URLs the HTTP transport cannot post to
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| {
                LbryError::InvalidUrl(format!("{} (expected http:// or https://)", url))
            })?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(LbryError::InvalidUrl(format!("{} (missing host)", url)));
        }

        Ok(())
    }
}
