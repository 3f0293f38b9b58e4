//! Error types for the Census client.

/// Result type for client operations.
pub type CensusResult<T> = Result<T, CensusError>;

/// Error types that can occur when talking to the Census Data API.
#[derive(Debug, thiserror::Error)]
pub enum CensusError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status. The body is kept verbatim.
    #[error("Census API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Response body did not match the expected shape.
    #[error("Failed to decode Census API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CensusError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Api {
            status,
            body: body.to_string(),
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
