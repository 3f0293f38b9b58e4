//! HTTP transport layer for the Census client.

use crate::config::ClientConfig;
use crate::error::{CensusError, CensusResult};
use crate::rate_gate::RateGate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("census-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport issuing rate-gated GET requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    gate: Arc<RateGate>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: &ClientConfig) -> CensusResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            gate: Arc::new(RateGate::new(config.min_request_interval)),
        })
    }

    /// The gate shared by every clone of this transport.
    pub fn gate(&self) -> &Arc<RateGate> {
        &self.gate
    }

    /// Issue a single GET request, failing on any non-success status.
    pub async fn send(&self, url: Url) -> CensusResult<Response> {
        self.gate.acquire().await;

        // The query string may carry the API key, so only the path is logged.
        debug!(path = url.path(), "GET request");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Census API returned an error");
        Err(CensusError::from_response(status.as_u16(), &body))
    }

    /// Issue a GET request and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> CensusResult<T> {
        let response = self.send(url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`get_json`](Self::get_json), but an empty body yields `None`.
    pub async fn get_json_opt<T: DeserializeOwned>(&self, url: Url) -> CensusResult<Option<T>> {
        let response = self.send(url).await?;
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    fn create_transport() -> HttpTransport {
        let mut config = ClientConfig::new(Url::parse("http://localhost").unwrap());
        config.min_request_interval = Duration::from_millis(1);
        HttpTransport::new(&config).unwrap()
    }

    fn url(server: &MockServer, path: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), path)).unwrap()
    }

    #[tokio::test]
    async fn test_get_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})),
            )
            .mount(&server)
            .await;

        let transport = create_transport();
        let result: TestResponse = transport.get_json(url(&server, "/data.json")).await.unwrap();
        assert_eq!(result.message, "ok");
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bad"))
            .respond_with(ResponseTemplate::new(400).set_body_string("error: unknown variable"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport();
        let result: CensusResult<TestResponse> = transport.get_json(url(&server, "/bad")).await;

        match result {
            Err(CensusError::Api { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "error: unknown variable");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport();
        let result = transport.send(url(&server, "/flaky")).await;

        assert_eq!(result.unwrap_err().status(), Some(503));
    }

    #[tokio::test]
    async fn test_decode_error_on_shape_mismatch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>Invalid Key</html>"))
            .mount(&server)
            .await;

        let transport = create_transport();
        let result: CensusResult<TestResponse> = transport.get_json(url(&server, "/html")).await;

        assert!(matches!(result, Err(CensusError::Decode(_))));
    }

    #[tokio::test]
    async fn test_get_json_opt_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = create_transport();
        let result: Option<TestResponse> =
            transport.get_json_opt(url(&server, "/empty")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_send_spaces_sequential_requests() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(3)
            .mount(&server)
            .await;

        let interval = Duration::from_millis(100);
        let mut config = ClientConfig::new(Url::parse("http://localhost").unwrap());
        config.min_request_interval = interval;
        let transport = HttpTransport::new(&config).unwrap();

        let start = std::time::Instant::now();
        for _ in 0..3 {
            transport.send(url(&server, "/data.json")).await.unwrap();
        }

        assert!(start.elapsed() >= interval * 2);
    }

    #[tokio::test]
    async fn test_clones_share_gate() {
        let transport = create_transport();
        let clone = transport.clone();

        assert!(Arc::ptr_eq(transport.gate(), clone.gate()));
    }
}
