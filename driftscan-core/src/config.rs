//! Scanner configuration

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::resource::ResourceType;
use crate::scanner::{ScanError, ScanResult};

/// Default number of enumerators running at the same time
pub const DEFAULT_MAX_PARALLEL: usize = 10;

/// Settings of a [`Scanner`](crate::scanner::Scanner)
///
/// ```json
/// {
///   "max_parallel": 4,
///   "ignored_types": ["aws_default_vpc"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Upper bound on concurrently running enumerators
    pub max_parallel: usize,
    /// Resource types that are not enumerated at all
    pub ignored_types: BTreeSet<ResourceType>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_parallel: DEFAULT_MAX_PARALLEL,
            ignored_types: BTreeSet::new(),
        }
    }
}

impl ScannerConfig {
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel;
        self
    }

    pub fn ignore_type(mut self, resource_type: ResourceType) -> Self {
        self.ignored_types.insert(resource_type);
        self
    }

    pub fn is_type_ignored(&self, resource_type: &ResourceType) -> bool {
        self.ignored_types.contains(resource_type)
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json_str(content: &str) -> ScanResult<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| ScanError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> ScanResult<()> {
        if self.max_parallel == 0 {
            return Err(ScanError::Configuration(
                "max_parallel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
