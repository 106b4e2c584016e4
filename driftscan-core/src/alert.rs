//! Alerts raised while scanning
//!
//! Some failures are not worth aborting a scan for. Access denied on a
//! listing call is reported as an alert and the resource type is left out of
//! the drift calculation.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::enumerator::EnumerationError;

const ACCESS_DENIED_GUIDANCE: &str = "It seems that we got access denied exceptions while \
listing resources.\nPlease make sure the credentials used for the scan are allowed to list \
every enumerated resource type.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub message: String,
    /// Whether resources of the alerted type must be left out of the comparison
    pub should_ignore_resource: bool,
    /// Guidance for the user on how to fix the underlying provider setup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_message: Option<String>,
}

impl Alert {
    pub fn new(message: impl Into<String>, should_ignore_resource: bool) -> Self {
        Self {
            message: message.into(),
            should_ignore_resource,
            provider_message: None,
        }
    }

    pub fn with_provider_message(mut self, message: impl Into<String>) -> Self {
        self.provider_message = Some(message.into());
        self
    }

    pub fn provider_message(&self) -> Option<&str> {
        self.provider_message.as_deref()
    }

    /// Alert for a resource type that could not be listed for lack of permissions
    pub fn enumeration_access_denied(error: &EnumerationError) -> Self {
        let resource_type = error.resource_type();
        Self::new(
            format!(
                "Ignoring {} from drift calculation: Listing {} is forbidden: {}",
                resource_type,
                resource_type,
                error.cause()
            ),
            true,
        )
        .with_provider_message(ACCESS_DENIED_GUIDANCE)
    }
}

/// Collects alerts keyed by the resource type (or resource) they concern
///
/// Shared between concurrently running enumerations.
#[derive(Debug, Default)]
pub struct Alerter {
    alerts: Mutex<BTreeMap<String, Vec<Alert>>>,
}

impl Alerter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_alert(&self, key: impl Into<String>, alert: Alert) {
        let mut alerts = self
            .alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        alerts.entry(key.into()).or_default().push(alert);
    }

    /// Snapshot of every alert sent so far
    pub fn alerts(&self) -> BTreeMap<String, Vec<Alert>> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns true if an alert asks for `key` to be left out of the comparison
    pub fn is_ignored(&self, key: &str) -> bool {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .is_some_and(|alerts| alerts.iter().any(|a| a.should_ignore_resource))
    }
}
