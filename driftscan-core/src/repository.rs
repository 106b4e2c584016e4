//! Repository - Error model shared by provider listing layers
//!
//! Repositories perform the actual provider calls (pagination, retries and
//! throttling included) and hand back either the complete list of raw items
//! or a `RepositoryError`. Provider crates declare the repository traits
//! themselves; this module only holds what every provider shares.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Errors reported by a provider listing call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Credentials are valid but lack permission for the call
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// The provider rejected the call because of rate limiting
    #[error("request throttled: {0}")]
    Throttled(String),

    /// Connectivity problem (DNS, TLS, timeout, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with an error status
    #[error("request failed with status {status} ({code}): {message}")]
    Request {
        status: u16,
        code: String,
        message: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RepositoryError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn request(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns true if the caller is not allowed to list the resources
    ///
    /// Some services answer 400 with an `AccessDenied*` code instead of 403,
    /// others only mention `AccessDenied` in the error text.
    pub fn is_access_denied(&self) -> bool {
        match self {
            Self::AccessDenied(_) => true,
            Self::Request { status: 403, .. } => true,
            Self::Request { status: 400, code, .. } if code.contains("AccessDenied") => true,
            // e.g. "AccessDenied: Error listing bucket policy"
            _ => self.to_string().contains("AccessDenied"),
        }
    }

    /// Returns true if repeating the call later may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Throttled(_) | Self::Network(_) => true,
            Self::Request { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Return type for listing calls referenced through function pointers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
