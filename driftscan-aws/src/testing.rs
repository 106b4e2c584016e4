//! In-memory repositories for tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use driftscan_core::{DefaultResourceFactory, RepositoryError, RepositoryResult};

use crate::catalog::AwsRepositories;
use crate::repository::*;

/// A canned listing answer, counting how often it was requested
pub struct Canned<T> {
    response: RepositoryResult<T>,
    calls: AtomicUsize,
}

impl<T: Clone> Canned<T> {
    pub fn ok(value: T) -> Self {
        Self {
            response: Ok(value),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn err(error: RepositoryError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    fn get(&self) -> RepositoryResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Default> Default for Canned<T> {
    fn default() -> Self {
        Self::ok(T::default())
    }
}

pub fn vpc(id: &str) -> Vpc {
    Vpc {
        vpc_id: Some(id.to_string()),
        ..Default::default()
    }
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[derive(Default)]
pub struct FakeEc2 {
    pub vpcs: Canned<VpcListing>,
    pub key_pairs: Canned<Vec<KeyPair>>,
}

impl FakeEc2 {
    pub fn with_vpcs(all: Vec<Vpc>, defaults: Vec<Vpc>) -> Self {
        Self {
            vpcs: Canned::ok(VpcListing { all, defaults }),
            ..Default::default()
        }
    }

    pub fn failing(error: RepositoryError) -> Self {
        Self {
            vpcs: Canned::err(error.clone()),
            key_pairs: Canned::err(error),
        }
    }

    pub fn vpc_calls(&self) -> usize {
        self.vpcs.calls()
    }
}

#[async_trait]
impl Ec2Repository for FakeEc2 {
    async fn list_all_vpcs(&self) -> RepositoryResult<VpcListing> {
        self.vpcs.get()
    }

    async fn list_all_key_pairs(&self) -> RepositoryResult<Vec<KeyPair>> {
        self.key_pairs.get()
    }
}

/// EC2 repository whose VPC listing times out a given number of times first
pub struct FlakyEc2 {
    failures: usize,
    listing: VpcListing,
    calls: AtomicUsize,
}

impl FlakyEc2 {
    pub fn new(failures: usize, listing: VpcListing) -> Self {
        Self {
            failures,
            listing,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn vpc_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Ec2Repository for FlakyEc2 {
    async fn list_all_vpcs(&self) -> RepositoryResult<VpcListing> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            return Err(RepositoryError::network("network timeout"));
        }
        Ok(self.listing.clone())
    }

    async fn list_all_key_pairs(&self) -> RepositoryResult<Vec<KeyPair>> {
        Ok(vec![])
    }
}

#[derive(Default)]
pub struct FakeDynamoDb {
    pub tables: Canned<Vec<String>>,
}

#[async_trait]
impl DynamoDbRepository for FakeDynamoDb {
    async fn list_all_tables(&self) -> RepositoryResult<Vec<String>> {
        self.tables.get()
    }
}

#[derive(Default)]
pub struct FakeEks {
    pub clusters: Canned<Vec<String>>,
}

#[async_trait]
impl EksRepository for FakeEks {
    async fn list_all_clusters(&self) -> RepositoryResult<Vec<String>> {
        self.clusters.get()
    }
}

#[derive(Default)]
pub struct FakeElb {
    pub load_balancers: Canned<Vec<LoadBalancer>>,
}

#[async_trait]
impl ElbRepository for FakeElb {
    async fn list_all_load_balancers(&self) -> RepositoryResult<Vec<LoadBalancer>> {
        self.load_balancers.get()
    }
}

#[derive(Default)]
pub struct FakeKms {
    pub keys: Canned<Vec<KmsKey>>,
    pub aliases: Canned<Vec<KmsAlias>>,
}

#[async_trait]
impl KmsRepository for FakeKms {
    async fn list_all_keys(&self) -> RepositoryResult<Vec<KmsKey>> {
        self.keys.get()
    }

    async fn list_all_aliases(&self) -> RepositoryResult<Vec<KmsAlias>> {
        self.aliases.get()
    }
}

#[derive(Default)]
pub struct FakeSns {
    pub topics: Canned<Vec<SnsTopic>>,
}

#[async_trait]
impl SnsRepository for FakeSns {
    async fn list_all_topics(&self) -> RepositoryResult<Vec<SnsTopic>> {
        self.topics.get()
    }
}

/// Fake repositories, kept concrete so tests can inspect call counts
#[derive(Default)]
pub struct Fakes {
    pub ec2: Arc<FakeEc2>,
    pub dynamodb: Arc<FakeDynamoDb>,
    pub eks: Arc<FakeEks>,
    pub elb: Arc<FakeElb>,
    pub kms: Arc<FakeKms>,
    pub sns: Arc<FakeSns>,
}

impl Fakes {
    pub fn repositories(&self) -> AwsRepositories {
        AwsRepositories {
            ec2: self.ec2.clone(),
            dynamodb: self.dynamodb.clone(),
            eks: self.eks.clone(),
            elb: self.elb.clone(),
            kms: self.kms.clone(),
            sns: self.sns.clone(),
        }
    }

    pub fn enumerators(&self) -> Vec<Arc<dyn driftscan_core::Enumerator>> {
        crate::catalog::enumerators(&self.repositories(), Arc::new(DefaultResourceFactory))
    }
}
