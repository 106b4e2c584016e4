//! Driftscan AWS
//!
//! Enumerators for AWS resource types. Each resource type is described by a
//! [`Binding`](driftscan_core::Binding) in [`bindings`]; [`enumerators`]
//! assembles the full set for one scan pass from a set of repositories.

pub mod bindings;
pub mod catalog;
pub mod network;
pub mod repository;
pub mod resource_types;

#[cfg(test)]
mod testing;

pub use catalog::{AwsRepositories, enumerators};
pub use network::NetworkListing;
