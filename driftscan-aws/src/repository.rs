//! Repository traits for the AWS services being enumerated
//!
//! Implementations wrap the service clients and are responsible for
//! pagination, retries and throttling. Every listing returns either all the
//! items or an error.

use async_trait::async_trait;
use driftscan_core::RepositoryResult;

/// A VPC as described by EC2
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vpc {
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub is_default: bool,
}

/// Both views of one VPC listing call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VpcListing {
    pub all: Vec<Vpc>,
    /// Subset flagged as default VPCs
    pub defaults: Vec<Vpc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPair {
    pub key_name: Option<String>,
    pub key_pair_id: Option<String>,
}

/// Classic load balancer description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadBalancer {
    pub load_balancer_name: Option<String>,
    pub dns_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmsKey {
    pub key_id: Option<String>,
    pub key_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmsAlias {
    pub alias_name: Option<String>,
    pub alias_arn: Option<String>,
    pub target_key_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnsTopic {
    pub topic_arn: Option<String>,
}

#[async_trait]
pub trait Ec2Repository: Send + Sync {
    /// List VPCs once, returning the full list and the default subset
    async fn list_all_vpcs(&self) -> RepositoryResult<VpcListing>;

    async fn list_all_key_pairs(&self) -> RepositoryResult<Vec<KeyPair>>;
}

#[async_trait]
pub trait DynamoDbRepository: Send + Sync {
    /// Table names
    async fn list_all_tables(&self) -> RepositoryResult<Vec<String>>;
}

#[async_trait]
pub trait EksRepository: Send + Sync {
    /// Cluster names
    async fn list_all_clusters(&self) -> RepositoryResult<Vec<String>>;
}

#[async_trait]
pub trait ElbRepository: Send + Sync {
    async fn list_all_load_balancers(&self) -> RepositoryResult<Vec<LoadBalancer>>;
}

#[async_trait]
pub trait KmsRepository: Send + Sync {
    async fn list_all_keys(&self) -> RepositoryResult<Vec<KmsKey>>;

    async fn list_all_aliases(&self) -> RepositoryResult<Vec<KmsAlias>>;
}

#[async_trait]
pub trait SnsRepository: Send + Sync {
    async fn list_all_topics(&self) -> RepositoryResult<Vec<SnsTopic>>;
}

// Trait objects as stored by the catalog and referenced by bindings
pub type Ec2 = dyn Ec2Repository;
pub type DynamoDb = dyn DynamoDbRepository;
pub type Eks = dyn EksRepository;
pub type Elb = dyn ElbRepository;
pub type Kms = dyn KmsRepository;
pub type Sns = dyn SnsRepository;
