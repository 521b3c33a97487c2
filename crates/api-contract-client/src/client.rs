//! HTTP client construction

use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::request::RequestSpec;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Overall request timeout; `None` keeps the client default (no timeout)
    pub timeout: Option<Duration>,

    /// Connect timeout; `None` keeps the client default
    pub connect_timeout: Option<Duration>,

    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: concat!("api-contract-suite/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new client config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overall request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client shared by the steps of a case
///
/// Holds no base URL: every request names its own, so cases can be pointed at
/// live services or local stubs independently.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) inner: reqwest::Client,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// TLS uses rustls with the bundled web PKI roots; certificates are
    /// validated normally.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let inner = builder.build().map_err(ClientError::Build)?;
        debug!(
            timeout = ?config.timeout,
            connect_timeout = ?config.connect_timeout,
            "HTTP client ready"
        );

        Ok(Self { inner })
    }

    /// Start a request against `base_url`
    pub fn request(&self, base_url: impl Into<String>) -> RequestSpec<'_> {
        RequestSpec::new(self, base_url.into())
    }
}
