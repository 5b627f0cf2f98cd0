//! Client configuration.

use crate::error::Error;
use std::time::Duration;

/// Snipe-IT client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. <https://assets.example.org/api/v1/>
    pub base_url: String,
    /// Personal API token, sent as a bearer token
    pub token: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("snipeit-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SNIPEIT_BASE_URL`: API root URL
    /// - `SNIPEIT_TOKEN`: personal API token
    /// - `SNIPEIT_TIMEOUT_SECS`: request timeout in seconds (default 30)
    ///
    /// Unset variables keep their defaults; an empty URL or token is rejected
    /// later, when the client is built.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `SNIPEIT_TIMEOUT_SECS` is not a
    /// whole number of seconds.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Some(url) = lookup("SNIPEIT_BASE_URL") {
            config.base_url = url;
        }

        if let Some(token) = lookup("SNIPEIT_TOKEN") {
            config.token = token;
        }

        if let Some(secs) = lookup("SNIPEIT_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                Error::Configuration(format!("invalid SNIPEIT_TIMEOUT_SECS {secs:?}: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
