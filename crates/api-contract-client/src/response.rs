//! Fully-read HTTP responses

use bytes::Bytes;
use once_cell::sync::OnceCell;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Version};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::time::Duration;
use url::Url;

use crate::error::{ClientError, Result};

/// Longest body excerpt quoted in a decode error
const SNIPPET_LEN: usize = 200;

/// A response whose body has been read in full
///
/// The body is decoded as JSON the first time [`ApiResponse::json`] is
/// called and the decoded value is cached for later reads.
#[derive(Debug)]
pub struct ApiResponse {
    method: Method,
    url: Url,
    version: Version,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    elapsed: Duration,
    json: OnceCell<Value>,
}

impl ApiResponse {
    pub(crate) fn new(
        method: Method,
        url: Url,
        version: Version,
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        elapsed: Duration,
    ) -> Self {
        Self {
            method,
            url,
            version,
            status,
            headers,
            body,
            elapsed,
            json: OnceCell::new(),
        }
    }

    /// Verb the request was sent with
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Final request URL, including the query string
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Status as a bare integer
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Status line, e.g. `HTTP/1.1 200 OK`
    pub fn status_line(&self) -> String {
        format!("{:?} {}", self.version, self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of header `name`, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Time from sending the request to reading the last body byte
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Body decoded as JSON
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Decode` when the body is not valid JSON. The
    /// error is not cached; every call on an invalid body fails the same way.
    pub fn json(&self) -> Result<&Value> {
        self.json.get_or_try_init(|| {
            serde_json::from_slice(&self.body).map_err(|source| ClientError::Decode {
                snippet: self.snippet(),
                source,
            })
        })
    }

    /// Body decoded into `T`
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| ClientError::Decode {
            snippet: self.snippet(),
            source,
        })
    }

    /// Body pretty-printed when it is JSON, otherwise the raw text
    pub fn pretty_body(&self) -> String {
        match self.json() {
            Ok(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| self.text().into_owned()),
            Err(_) => self.text().into_owned(),
        }
    }

    /// Status line, headers and pretty body, one header per line
    pub fn render_all(&self) -> String {
        let mut out = self.status_line();
        for (name, value) in &self.headers {
            out.push('\n');
            out.push_str(name.as_str());
            out.push_str(": ");
            out.push_str(value.to_str().unwrap_or("<binary>"));
        }
        out.push_str("\n\n");
        out.push_str(&self.pretty_body());
        out
    }

    fn snippet(&self) -> String {
        let text = self.text();
        if text.chars().count() <= SNIPPET_LEN {
            return text.into_owned();
        }
        let mut cut: String = text.chars().take(SNIPPET_LEN).collect();
        cut.push('…');
        cut
    }
}
