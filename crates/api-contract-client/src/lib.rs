//! HTTP client wrapper for the API contract suite
//!
//! A thin layer over `reqwest` that mirrors how the contract cases are
//! written: pick a base URL, add headers, query parameters and a body, then
//! execute a verb against a path. Responses are read in full and decode their
//! body as JSON on first access.
//!
//! # Example
//!
//! ```rust,no_run
//! use api_contract_client::{ApiClient, ClientConfig};
//!
//! # async fn run() -> Result<(), api_contract_client::ClientError> {
//! let client = ApiClient::new(&ClientConfig::default())?;
//! let response = client
//!     .request("https://petstore.swagger.io/v2")
//!     .query("status", "available")
//!     .get("/pet/findByStatus")
//!     .await?;
//! println!("{}", response.status_line());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::{ApiClient, ClientConfig};
pub use error::{ClientError, Result};
pub use request::{resolve_url, RequestSpec};
pub use response::ApiResponse;

// Re-exported so callers can name verbs and status codes without a direct
// reqwest dependency
pub use reqwest::{Method, StatusCode};
