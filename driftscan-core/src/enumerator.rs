//! Enumerator - Contract for listing every live resource of one type
//!
//! An Enumerator binds a repository capability and a resource factory, and
//! turns the raw items of one listing call into abstract resources.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::repository::RepositoryError;
use crate::resource::{Resource, ResourceType};

/// Classification of an enumeration failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationErrorKind {
    /// The provider call itself failed (connectivity, auth, throttling, quota)
    Listing,
    /// A fetched item could not be turned into a valid resource
    Scanning,
}

impl fmt::Display for EnumerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing => f.write_str("listing"),
            Self::Scanning => f.write_str("scanning"),
        }
    }
}

/// Underlying reason of an enumeration failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationCause {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("item has no {field}")]
    MissingIdentity { field: &'static str },

    #[error("identity {id} returned more than once")]
    DuplicateIdentity { id: String },
}

/// A classified failure of one enumerator, tagged with its resource type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error {kind} {resource_type}: {cause}")]
pub struct EnumerationError {
    kind: EnumerationErrorKind,
    resource_type: ResourceType,
    #[source]
    cause: EnumerationCause,
}

impl EnumerationError {
    pub fn new(
        kind: EnumerationErrorKind,
        resource_type: ResourceType,
        cause: impl Into<EnumerationCause>,
    ) -> Self {
        Self {
            kind,
            resource_type,
            cause: cause.into(),
        }
    }

    /// The provider call failed
    pub fn listing(resource_type: ResourceType, cause: RepositoryError) -> Self {
        Self::new(EnumerationErrorKind::Listing, resource_type, cause)
    }

    /// A fetched item could not be mapped
    pub fn scanning(resource_type: ResourceType, cause: impl Into<EnumerationCause>) -> Self {
        Self::new(EnumerationErrorKind::Scanning, resource_type, cause)
    }

    pub fn kind(&self) -> EnumerationErrorKind {
        self.kind
    }

    pub fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    pub fn cause(&self) -> &EnumerationCause {
        &self.cause
    }

    /// The repository error this failure wraps, if any
    pub fn repository_error(&self) -> Option<&RepositoryError> {
        match &self.cause {
            EnumerationCause::Repository(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if the failure comes from missing list permissions
    pub fn is_access_denied(&self) -> bool {
        self.repository_error()
            .is_some_and(RepositoryError::is_access_denied)
    }

    /// Returns true if a later scan may succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        self.repository_error()
            .is_some_and(RepositoryError::is_retryable)
    }
}

/// Result type for enumeration
pub type EnumerationResult<T> = Result<T, EnumerationError>;

/// Lists every live resource of a single type
///
/// Implementations hold no mutable state and can be invoked repeatedly or
/// concurrently. `enumerate` either returns every resource of the type or a
/// classified error, never a partial list.
#[async_trait]
pub trait Enumerator: Send + Sync {
    /// Resource type produced by this enumerator (constant per instance)
    fn supported_type(&self) -> ResourceType;

    /// List all live resources of the supported type
    async fn enumerate(&self) -> EnumerationResult<Vec<Resource>>;
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    const AWS_SNS_TOPIC: ResourceType = ResourceType::from_static("aws_sns_topic");

    #[test]
    fn listing_error_wraps_repository_cause() {
        let cause = RepositoryError::network("network timeout");
        let error = EnumerationError::listing(AWS_SNS_TOPIC, cause.clone());

        assert_eq!(error.kind(), EnumerationErrorKind::Listing);
        assert_eq!(error.resource_type(), &AWS_SNS_TOPIC);
        assert_eq!(error.repository_error(), Some(&cause));
        assert_eq!(
            error.to_string(),
            "error listing aws_sns_topic: network error: network timeout"
        );
        assert_eq!(
            error.source().map(|s| s.to_string()),
            Some("network error: network timeout".to_string())
        );
    }

    #[test]
    fn scanning_error_for_missing_identity() {
        let error = EnumerationError::scanning(
            AWS_SNS_TOPIC,
            EnumerationCause::MissingIdentity { field: "TopicArn" },
        );

        assert_eq!(error.kind(), EnumerationErrorKind::Scanning);
        assert!(error.repository_error().is_none());
        assert!(!error.is_access_denied());
        assert_eq!(error.to_string(), "error scanning aws_sns_topic: item has no TopicArn");
    }

    #[test]
    fn retryable_failures() {
        let throttled = RepositoryError::Throttled("Rate exceeded".to_string());
        assert!(EnumerationError::listing(AWS_SNS_TOPIC, throttled.clone()).is_retryable());
        assert!(EnumerationError::scanning(AWS_SNS_TOPIC, throttled).is_retryable());

        let denied = RepositoryError::AccessDenied("sns:ListTopics".to_string());
        assert!(!EnumerationError::listing(AWS_SNS_TOPIC, denied).is_retryable());

        let missing = EnumerationCause::MissingIdentity { field: "TopicArn" };
        assert!(!EnumerationError::scanning(AWS_SNS_TOPIC, missing).is_retryable());
    }

    #[test]
    fn access_denied_is_seen_through_classification() {
        let error = EnumerationError::scanning(
            AWS_SNS_TOPIC,
            RepositoryError::request(403, "AuthorizationError", "denied"),
        );
        assert!(error.is_access_denied());
    }
}
