//! Driftscan Core
//!
//! Core library that turns provider listing calls into a uniform inventory of
//! abstract resources, ready to be compared against declared infrastructure.

pub mod alert;
pub mod config;
pub mod engine;
pub mod enumerator;
pub mod repository;
pub mod resource;
pub mod scanner;

pub use alert::{Alert, Alerter};
pub use config::ScannerConfig;
pub use engine::{Binding, ListEnumerator};
pub use enumerator::{
    EnumerationCause, EnumerationError, EnumerationErrorKind, EnumerationResult, Enumerator,
};
pub use repository::{BoxFuture, RepositoryError, RepositoryResult};
pub use resource::{
    Attributes, DefaultResourceFactory, Resource, ResourceFactory, ResourceType, Value,
};
pub use scanner::{ScanError, ScanReport, ScanResult, Scanner};
