//! Configuration types for the Census client.

use crate::error::{CensusError, CensusResult};
use std::time::Duration;
use url::Url;

/// Public base of the Census Data API.
pub const DEFAULT_BASE_URL: &str = "https://api.census.gov/data";

/// Environment variable holding the Census API key.
pub const API_KEY_ENV: &str = "CENSUS_API_KEY";

/// Minimum spacing between outbound requests (5 requests per second).
pub const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(200);

/// Configuration for the Census client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Data API, without a trailing slash.
    pub base_url: Url,
    /// API key forwarded on tabular queries.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Minimum spacing enforced by the rate gate.
    pub min_request_interval: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: Duration::from_secs(30),
            min_request_interval: DEFAULT_MIN_REQUEST_INTERVAL,
        }
    }

    /// Default configuration with the API key read from `CENSUS_API_KEY`.
    pub fn from_env() -> CensusResult<Self> {
        let mut config = Self::new(Url::parse(DEFAULT_BASE_URL)?);
        config.api_key = std::env::var(API_KEY_ENV).ok();
        Ok(config)
    }

    /// Return the API key, failing if it is absent or empty.
    pub fn require_api_key(&self) -> CensusResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(CensusError::Config(format!(
                "{} environment variable is not set",
                API_KEY_ENV
            ))),
        }
    }

    /// Base URL as a string with any trailing slash removed.
    pub(crate) fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
