//! Main client for the Census Data API.

use crate::api::*;
use crate::config::{ClientConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MIN_REQUEST_INTERVAL};
use crate::error::CensusResult;
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for the Census Data API.
///
/// Clones share one rate gate, so a process that builds a single client
/// and clones it keeps all of its requests spaced apart.
#[derive(Debug, Clone)]
pub struct CensusClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl CensusClient {
    /// Create a new client builder.
    pub fn builder() -> CensusClientBuilder {
        CensusClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> CensusResult<Self> {
        let http = HttpTransport::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Create a client against the public API with the key from the environment.
    pub fn from_env() -> CensusResult<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the dataset catalog API.
    pub fn datasets(&self) -> DatasetsApi<'_> {
        DatasetsApi::new(self)
    }

    /// Get the variables API.
    pub fn variables(&self) -> VariablesApi<'_> {
        VariablesApi::new(self)
    }

    /// Get the geographies API.
    pub fn geographies(&self) -> GeographiesApi<'_> {
        GeographiesApi::new(self)
    }

    /// Get the tabular data API.
    pub fn data(&self) -> DataApi<'_> {
        DataApi::new(self)
    }

    /// `{base}.json`
    pub(crate) fn catalog_url(&self) -> CensusResult<Url> {
        Ok(Url::parse(&format!("{}.json", self.config.base()))?)
    }

    /// `{base}/{vintage}/{dataset}{suffix}`
    pub(crate) fn dataset_url(
        &self,
        vintage: &str,
        dataset: &str,
        suffix: &str,
    ) -> CensusResult<Url> {
        Ok(Url::parse(&format!(
            "{}/{}/{}{}",
            self.config.base(),
            vintage,
            dataset,
            suffix
        ))?)
    }
}

/// Builder for creating a CensusClient.
pub struct CensusClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    min_request_interval: Duration,
}

impl CensusClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
            min_request_interval: DEFAULT_MIN_REQUEST_INTERVAL,
        }
    }

    /// Override the API base URL (defaults to the public Census endpoint).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Read the API key from `CENSUS_API_KEY`, if set.
    pub fn api_key_from_env(mut self) -> Self {
        self.api_key = std::env::var(API_KEY_ENV).ok();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the minimum spacing between requests.
    pub fn min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }

    /// Build the client.
    pub fn build(self) -> CensusResult<CensusClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let config = ClientConfig {
            base_url: Url::parse(&base_url)?,
            api_key: self.api_key,
            timeout: self.timeout,
            min_request_interval: self.min_request_interval,
        };

        CensusClient::from_config(config)
    }
}

impl Default for CensusClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
