//! Request building and execution

use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;
use url::Url;

use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::response::ApiResponse;

/// Join a base URL, a path and query parameters
///
/// The path is appended to the base rather than resolved against it, so a
/// base of `https://petstore.swagger.io/v2` keeps its `/v2` segment. Query
/// parameters are form-encoded in the order given.
pub fn resolve_url(base_url: &str, path: &str, query: &[(String, String)]) -> Result<Url> {
    let base = base_url.trim_end_matches('/');
    let joined = if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    };

    let mut url = Url::parse(&joined).map_err(|source| ClientError::InvalidUrl {
        url: joined.clone(),
        source,
    })?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}

/// A request under construction
///
/// Created by [`ApiClient::request`]; consumed by [`RequestSpec::send`] or
/// one of the verb shorthands.
#[derive(Debug)]
pub struct RequestSpec<'c> {
    client: &'c ApiClient,
    base_url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Bytes>,
}

impl<'c> RequestSpec<'c> {
    pub(crate) fn new(client: &'c ApiClient, base_url: String) -> Self {
        Self {
            client,
            base_url,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add several headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a query parameter
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add several query parameters
    pub fn queries<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attach a raw body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body
    ///
    /// Adds `Content-Type: application/json` unless a content type was
    /// already set.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(ClientError::Encode)?;
        if self.header_value(CONTENT_TYPE.as_str()).is_none() {
            self.headers
                .push((CONTENT_TYPE.as_str().to_string(), "application/json".to_string()));
        }
        self.body = Some(Bytes::from(body));
        Ok(self)
    }

    /// First value set for header `name` (case-insensitive)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The URL this request would be sent to for `path`
    pub fn url(&self, path: &str) -> Result<Url> {
        resolve_url(&self.base_url, path, &self.query)
    }

    /// Execute `method` against `path`
    ///
    /// Performs exactly one round-trip. The whole body is read before
    /// returning, which releases the connection.
    pub async fn send(self, method: Method, path: &str) -> Result<ApiResponse> {
        let url = self.url(path)?;

        let mut builder = self.client.inner.request(method.clone(), url.clone());
        for (name, value) in &self.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ClientError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            builder = builder.header(header_name, header_value);
        }
        if let Some(body) = self.body {
            builder = builder.body(body);
        }

        debug!(method = %method, url = %url, headers = self.headers.len(), "Sending request");
        let started = Instant::now();

        let response = builder.send().await.map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;

        let version = response.version();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;
        let elapsed = started.elapsed();

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Received response"
        );

        Ok(ApiResponse::new(method, url, version, status, headers, body, elapsed))
    }

    /// `GET path`
    pub async fn get(self, path: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path).await
    }

    /// `POST path`
    pub async fn post(self, path: &str) -> Result<ApiResponse> {
        self.send(Method::POST, path).await
    }
}
