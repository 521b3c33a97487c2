//! Client error types

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while building, sending or decoding a request
#[derive(Error, Debug)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Base URL and path do not form a valid URL
    #[error("Invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Header name or value rejected
    #[error("Invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// DNS, connect, TLS, timeout or body-read failure
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body accessed as JSON but is not JSON
    #[error("Response body is not valid JSON ({source}): {snippet}")]
    Decode {
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Whether the failure happened on the wire rather than in our own
    /// request building or response decoding
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether the failure is a malformed response
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
