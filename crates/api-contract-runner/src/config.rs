//! Runner configuration
//!
//! This module handles hierarchical configuration loading from multiple sources:
//! - Default configuration file
//! - Environment-specific configuration file
//! - Environment variables
//!
//! Every field has a default, and the defaults are the live contract: with
//! no file and no variables the runner targets the public services.

use api_contract_client::ClientConfig;
use api_contract_scenarios::{PetstoreTarget, ReqresTarget, Targets};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Runner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Pet-store service
    #[serde(default)]
    pub petstore: PetstoreTarget,

    /// Reqres service
    #[serde(default)]
    pub reqres: ReqresTarget,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Overall request timeout in seconds (unset: no timeout)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Connect timeout in seconds (unset: client default)
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,

    /// Override for the `User-Agent` header
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON formatting
    #[serde(default)]
    pub json_format: bool,

    /// Include thread IDs
    #[serde(default)]
    pub include_thread_ids: bool,

    /// Include target module
    #[serde(default = "default_true")]
    pub include_target: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
            include_thread_ids: false,
            include_target: default_true(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from files and environment
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default configuration file (config/default.toml)
    /// 2. Environment-specific file (config/{env}.toml)
    /// 3. Environment variables (API_CONTRACT__*)
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be read or parsed
    pub fn load(config_dir: impl Into<PathBuf>, environment: &str) -> Result<Self, ConfigError> {
        let config_dir = config_dir.into();

        let config = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", environment))).required(false))
            // e.g. API_CONTRACT__PETSTORE__BASE_URL=http://localhost:4010/v2
            .add_source(
                Environment::with_prefix("API_CONTRACT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration, falling back to defaults on error
    pub fn load_or_default(config_dir: impl Into<PathBuf>, environment: &str) -> Self {
        Self::load(config_dir, environment).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load configuration: {}", e);
            eprintln!("Using default configuration");
            Self::default()
        })
    }

    /// Service targets for the suite
    pub fn targets(&self) -> Targets {
        Targets {
            petstore: self.petstore.clone(),
            reqres: self.reqres.clone(),
        }
    }

    /// HTTP client settings
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new();
        if let Some(seconds) = self.http.timeout_seconds {
            client = client.with_timeout(Duration::from_secs(seconds));
        }
        if let Some(seconds) = self.http.connect_timeout_seconds {
            client = client.with_connect_timeout(Duration::from_secs(seconds));
        }
        if let Some(user_agent) = &self.http.user_agent {
            client = client.with_user_agent(user_agent.clone());
        }
        client
    }
}
