//! Service endpoints the cases run against
//!
//! Defaults point at the live demonstration services. Overriding a base URL
//! is how a case gets aimed at a local stub.

use api_contract_core::LoginRequest;
use serde::{Deserialize, Serialize};

/// Pet-store service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetstoreTarget {
    /// Base URL including the API version segment
    #[serde(default = "default_petstore_url")]
    pub base_url: String,
}

fn default_petstore_url() -> String {
    "https://petstore.swagger.io/v2".to_string()
}

impl Default for PetstoreTarget {
    fn default() -> Self {
        Self {
            base_url: default_petstore_url(),
        }
    }
}

impl PetstoreTarget {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Reqres user-authentication service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqresTarget {
    #[serde(default = "default_reqres_url")]
    pub base_url: String,

    /// Value of the `x-api-key` header
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Login email
    #[serde(default = "default_email")]
    pub email: String,

    /// Login password
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_reqres_url() -> String {
    "https://reqres.in".to_string()
}

fn default_api_key() -> String {
    "reqres-free-v1".to_string()
}

fn default_email() -> String {
    "eve.holt@reqres.in".to_string()
}

fn default_password() -> String {
    "cityslicka".to_string()
}

impl Default for ReqresTarget {
    fn default() -> Self {
        Self {
            base_url: default_reqres_url(),
            api_key: default_api_key(),
            email: default_email(),
            password: default_password(),
        }
    }
}

impl ReqresTarget {
    /// Live credentials against a different base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Replace the login password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Login request body built from the configured credentials
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest::new(self.email.clone(), self.password.clone())
    }
}

/// All services a suite touches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    #[serde(default)]
    pub petstore: PetstoreTarget,

    #[serde(default)]
    pub reqres: ReqresTarget,
}
