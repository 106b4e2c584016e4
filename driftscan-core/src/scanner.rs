//! Scanner - Runs enumerators and merges their resources into one inventory
//!
//! Enumerators are handed to the scanner explicitly and run concurrently,
//! bounded by the configured parallelism. Access denied failures turn into
//! alerts; any other enumeration failure aborts the scan. A scanner can be
//! stopped from another task, which aborts the running enumerations.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{Semaphore, watch};
use tokio::task::JoinSet;

use crate::alert::{Alert, Alerter};
use crate::config::ScannerConfig;
use crate::enumerator::{EnumerationError, Enumerator};
use crate::resource::Resource;

/// Errors that abort a scan
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),

    /// Invalid or unreadable scanner configuration
    #[error("Scanner configuration error: {0}")]
    Configuration(String),

    /// An enumeration task panicked or was cancelled
    #[error("Enumeration task failed: {0}")]
    Task(String),

    /// The scanner was stopped before every enumeration finished
    #[error("Scan interrupted")]
    Interrupted,
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Outcome of one scan pass
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub resources: Vec<Resource>,
    pub alerts: BTreeMap<String, Vec<Alert>>,
}

impl ScanReport {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Decide what a failed enumeration means for the scan
///
/// Returns `None` when the failure was turned into an alert, or the error
/// that must abort the scan.
pub fn handle_enumeration_error(
    error: EnumerationError,
    alerter: &Alerter,
) -> Option<EnumerationError> {
    if error.is_access_denied() {
        warn!(
            "Access denied while listing {}: {}",
            error.resource_type(),
            error.cause()
        );
        alerter.send_alert(
            error.resource_type().to_string(),
            Alert::enumeration_access_denied(&error),
        );
        return None;
    }
    Some(error)
}

pub struct Scanner {
    enumerators: Vec<Arc<dyn Enumerator>>,
    alerter: Arc<Alerter>,
    config: ScannerConfig,
    stop: watch::Sender<bool>,
}

impl Scanner {
    pub fn new(
        enumerators: Vec<Arc<dyn Enumerator>>,
        alerter: Arc<Alerter>,
        config: ScannerConfig,
    ) -> ScanResult<Self> {
        config.validate()?;
        Ok(Self {
            enumerators,
            alerter,
            config,
            stop: watch::channel(false).0,
        })
    }

    pub fn alerter(&self) -> &Arc<Alerter> {
        &self.alerter
    }

    /// Abort the running scan, and every later one, with [`ScanError::Interrupted`]
    pub fn stop(&self) {
        debug!("Stopping scanner");
        self.stop.send_replace(true);
    }

    /// Enumerate every registered, non-ignored resource type
    ///
    /// Resources come back grouped by enumerator in registration order, each
    /// group in the order its repository returned them.
    pub async fn resources(&self) -> ScanResult<Vec<Resource>> {
        let mut stopped = self.stop.subscribe();
        if *stopped.borrow() {
            return Err(ScanError::Interrupted);
        }

        let permits = Arc::new(Semaphore::new(self.config.max_parallel));
        let mut join_set = JoinSet::new();

        for (index, enumerator) in self.enumerators.iter().enumerate() {
            let resource_type = enumerator.supported_type();
            if self.config.is_type_ignored(&resource_type) {
                debug!(
                    "Ignored enumeration of {} since it is ignored in filter",
                    resource_type
                );
                continue;
            }

            let enumerator = Arc::clone(enumerator);
            let permits = Arc::clone(&permits);
            join_set.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| ScanError::Task(e.to_string()))?;
                Ok::<_, ScanError>((index, enumerator.enumerate().await))
            });
        }

        let mut groups: Vec<Option<Vec<Resource>>> = vec![None; self.enumerators.len()];

        // Dropping the join set on early return aborts the remaining tasks
        loop {
            let joined = tokio::select! {
                joined = join_set.join_next() => match joined {
                    Some(joined) => joined,
                    None => break,
                },
                _ = stopped.wait_for(|stopped| *stopped) => {
                    debug!("Scan interrupted, aborting {} enumerations", join_set.len());
                    join_set.abort_all();
                    return Err(ScanError::Interrupted);
                }
            };
            let (index, outcome) = joined.map_err(|e| ScanError::Task(e.to_string()))??;
            match outcome {
                Ok(resources) => {
                    for resource in &resources {
                        debug!(
                            "Found cloud resource {} ({})",
                            resource.id, resource.resource_type
                        );
                    }
                    groups[index] = Some(resources);
                }
                Err(error) => {
                    if let Some(error) = handle_enumeration_error(error, &self.alerter) {
                        debug!(
                            "Aborting scan after {} failed (retryable: {})",
                            error.resource_type(),
                            error.is_retryable()
                        );
                        return Err(error.into());
                    }
                }
            }
        }

        Ok(groups.into_iter().flatten().flatten().collect())
    }

    /// Run a full scan pass and report resources together with alerts
    pub async fn scan(&self) -> ScanResult<ScanReport> {
        let started_at = Utc::now();
        let resources = self.resources().await?;
        let finished_at = Utc::now();

        debug!(
            "Scan found {} resources in {} ms",
            resources.len(),
            (finished_at - started_at).num_milliseconds()
        );

        Ok(ScanReport {
            started_at,
            finished_at,
            resources,
            alerts: self.alerter.alerts(),
        })
    }
}
