use anyhow::{Context, Result};
use census_client::config::{DEFAULT_BASE_URL, DEFAULT_MIN_REQUEST_INTERVAL};
use census_client::CensusClient;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub census: CensusConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_min_request_interval_ms() -> u64 {
    DEFAULT_MIN_REQUEST_INTERVAL.as_millis() as u64
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if !config_path.exists() {
            tracing::info!("Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .context("Failed to read configuration file")?;
        toml::from_str(&content).context("Failed to parse configuration file")
    }
}

impl CensusConfig {
    /// Build the client every tool shares.
    pub fn build_client(&self, api_key: Option<String>) -> Result<CensusClient> {
        let mut builder = CensusClient::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .min_request_interval(Duration::from_millis(self.min_request_interval_ms));

        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }

        builder.build().context("Failed to create Census client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.census.base_url, "https://api.census.gov/data");
        assert_eq!(config.census.timeout_secs, 30);
        assert_eq!(config.census.min_request_interval_ms, 200);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[census]\nmin_request_interval_ms = 500").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.census.min_request_interval_ms, 500);
        assert_eq!(config.census.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[census\nbroken").unwrap();

        let err = ServerConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_build_client() {
        let config = CensusConfig {
            min_request_interval_ms: 50,
            ..Default::default()
        };

        let client = config.build_client(Some("key".to_string())).unwrap();
        assert_eq!(client.config().min_request_interval, Duration::from_millis(50));
        assert_eq!(client.config().api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_build_client_bad_url() {
        let config = CensusConfig {
            base_url: "::not a url::".to_string(),
            ..Default::default()
        };

        assert!(config.build_client(None).is_err());
    }
}
