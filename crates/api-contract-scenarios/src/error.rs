//! Case failures

use api_contract_client::{ApiResponse, ClientError};
use api_contract_core::{assertions, AssertionError, PathError};
use std::fmt;
use thiserror::Error;

/// Why a case failed, tagged with the step that failed
#[derive(Error, Debug)]
pub enum CaseError {
    /// Request could not be built, sent, or its body decoded
    #[error("{step}: {source}")]
    Client {
        step: &'static str,
        #[source]
        source: ClientError,
    },

    /// The service answered with an unexpected status
    #[error("{step}: unexpected status: {source}")]
    Status {
        step: &'static str,
        #[source]
        source: AssertionError,
    },

    /// A JSON path did not resolve
    #[error("{step}: {source}")]
    Path {
        step: &'static str,
        #[source]
        source: PathError,
    },

    /// A field check failed
    #[error("{step}: assertion failed: {source}")]
    Assertion {
        step: &'static str,
        #[source]
        source: AssertionError,
    },
}

/// Coarse failure classes reported by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// DNS, TCP, TLS or timeout
    Network,
    /// Unexpected status, or a body that is not JSON when read as JSON
    Protocol,
    /// Field mismatch or missing path
    Assertion,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Protocol => write!(f, "protocol"),
            Self::Assertion => write!(f, "assertion"),
        }
    }
}

impl CaseError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Client { source, .. } if source.is_network() => FailureKind::Network,
            Self::Client { .. } | Self::Status { .. } => FailureKind::Protocol,
            Self::Path { .. } | Self::Assertion { .. } => FailureKind::Assertion,
        }
    }

    /// Step of the case that failed
    pub fn step(&self) -> &'static str {
        match self {
            Self::Client { step, .. }
            | Self::Status { step, .. }
            | Self::Path { step, .. }
            | Self::Assertion { step, .. } => step,
        }
    }
}

/// Case selector did not name a known case
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown case `{0}` (expected one of: create-pet, get-available-pets, reqres-login)")]
pub struct UnknownCase(pub String);

/// Attach the failing step to a lower-level error
pub(crate) trait AtStep<T> {
    fn at(self, step: &'static str) -> Result<T, CaseError>;
}

impl<T> AtStep<T> for Result<T, ClientError> {
    fn at(self, step: &'static str) -> Result<T, CaseError> {
        self.map_err(|source| CaseError::Client { step, source })
    }
}

impl<T> AtStep<T> for Result<T, PathError> {
    fn at(self, step: &'static str) -> Result<T, CaseError> {
        self.map_err(|source| CaseError::Path { step, source })
    }
}

impl<T> AtStep<T> for Result<T, AssertionError> {
    fn at(self, step: &'static str) -> Result<T, CaseError> {
        self.map_err(|source| CaseError::Assertion { step, source })
    }
}

/// Require `response` to carry exactly `expected`
pub(crate) fn expect_status(
    step: &'static str,
    response: &ApiResponse,
    expected: u16,
) -> Result<(), CaseError> {
    assertions::is("status code", response.status_code(), expected)
        .map_err(|source| CaseError::Status { step, source })
}
