//! Shared VPC listing
//!
//! All VPCs and default VPCs are two resource types backed by a single EC2
//! call. `NetworkListing` keeps the first successful answer for the
//! enumerator set it belongs to and hands each binding its own view. Failed
//! calls are not kept: the next enumeration calls the repository again.

use std::sync::Arc;

use driftscan_core::{BoxFuture, RepositoryResult};
use log::debug;
use tokio::sync::OnceCell;

use crate::repository::{Ec2, Vpc, VpcListing};

pub struct NetworkListing {
    repository: Arc<Ec2>,
    listing: OnceCell<VpcListing>,
}

impl NetworkListing {
    pub fn new(repository: Arc<Ec2>) -> Self {
        Self {
            repository,
            listing: OnceCell::new(),
        }
    }

    /// Result of the combined call, fetched until it succeeds once
    pub async fn listing(&self) -> RepositoryResult<&VpcListing> {
        self.listing
            .get_or_try_init(|| async {
                debug!("Listing VPCs");
                self.repository.list_all_vpcs().await
            })
            .await
    }

    pub async fn all(&self) -> RepositoryResult<Vec<Vpc>> {
        Ok(self.listing().await?.all.clone())
    }

    pub async fn defaults(&self) -> RepositoryResult<Vec<Vpc>> {
        Ok(self.listing().await?.defaults.clone())
    }
}

pub(crate) fn list_vpcs(network: &NetworkListing) -> BoxFuture<'_, RepositoryResult<Vec<Vpc>>> {
    Box::pin(network.all())
}

pub(crate) fn list_default_vpcs(
    network: &NetworkListing,
) -> BoxFuture<'_, RepositoryResult<Vec<Vpc>>> {
    Box::pin(network.defaults())
}
