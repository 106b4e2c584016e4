//! Bindings of the AWS resource types
//!
//! | type                 | listing                       | identity           |
//! |----------------------|-------------------------------|--------------------|
//! | `aws_vpc`            | `list_all_vpcs` (all)         | `VpcId`            |
//! | `aws_default_vpc`    | `list_all_vpcs` (defaults)    | `VpcId`            |
//! | `aws_dynamodb_table` | `list_all_tables`             | table name         |
//! | `aws_key_pair`       | `list_all_key_pairs`          | `KeyName`          |
//! | `aws_eks_cluster`    | `list_all_clusters`           | cluster name       |
//! | `aws_elb`            | `list_all_load_balancers`     | `LoadBalancerName` |
//! | `aws_kms_alias`      | `list_all_aliases`            | `AliasName`        |
//! | `aws_kms_key`        | `list_all_keys`               | `KeyId`            |
//! | `aws_sns_topic`      | `list_all_topics`             | `TopicArn`         |
//!
//! `aws_default_vpc` and `aws_kms_key` report a failed listing call as a
//! scanning error rather than a listing error.

use driftscan_core::{Binding, BoxFuture, EnumerationErrorKind, RepositoryResult};

use crate::network::{NetworkListing, list_default_vpcs, list_vpcs};
use crate::repository::{
    DynamoDb, Ec2, Eks, Elb, KeyPair, Kms, KmsAlias, KmsKey, LoadBalancer, Sns, SnsTopic, Vpc,
};
use crate::resource_types::*;

pub const VPC: Binding<NetworkListing, Vpc> = Binding {
    resource_type: AWS_VPC,
    identity_field: "VpcId",
    list: list_vpcs,
    identity: vpc_id,
    listing_failure: EnumerationErrorKind::Listing,
};

pub const DEFAULT_VPC: Binding<NetworkListing, Vpc> = Binding {
    resource_type: AWS_DEFAULT_VPC,
    identity_field: "VpcId",
    list: list_default_vpcs,
    identity: vpc_id,
    listing_failure: EnumerationErrorKind::Scanning,
};

pub const DYNAMODB_TABLE: Binding<DynamoDb, String> = Binding {
    resource_type: AWS_DYNAMODB_TABLE,
    identity_field: "TableName",
    list: list_tables,
    identity: bare_name,
    listing_failure: EnumerationErrorKind::Listing,
};

pub const KEY_PAIR: Binding<Ec2, KeyPair> = Binding {
    resource_type: AWS_KEY_PAIR,
    identity_field: "KeyName",
    list: list_key_pairs,
    identity: key_name,
    listing_failure: EnumerationErrorKind::Listing,
};

pub const EKS_CLUSTER: Binding<Eks, String> = Binding {
    resource_type: AWS_EKS_CLUSTER,
    identity_field: "ClusterName",
    list: list_clusters,
    identity: bare_name,
    listing_failure: EnumerationErrorKind::Listing,
};

pub const ELB: Binding<Elb, LoadBalancer> = Binding {
    resource_type: AWS_ELB,
    identity_field: "LoadBalancerName",
    list: list_load_balancers,
    identity: load_balancer_name,
    listing_failure: EnumerationErrorKind::Listing,
};

pub const KMS_ALIAS: Binding<Kms, KmsAlias> = Binding {
    resource_type: AWS_KMS_ALIAS,
    identity_field: "AliasName",
    list: list_aliases,
    identity: alias_name,
    listing_failure: EnumerationErrorKind::Listing,
};

pub const KMS_KEY: Binding<Kms, KmsKey> = Binding {
    resource_type: AWS_KMS_KEY,
    identity_field: "KeyId",
    list: list_keys,
    identity: key_id,
    listing_failure: EnumerationErrorKind::Scanning,
};

pub const SNS_TOPIC: Binding<Sns, SnsTopic> = Binding {
    resource_type: AWS_SNS_TOPIC,
    identity_field: "TopicArn",
    list: list_topics,
    identity: topic_arn,
    listing_failure: EnumerationErrorKind::Listing,
};

fn list_tables(repo: &DynamoDb) -> BoxFuture<'_, RepositoryResult<Vec<String>>> {
    repo.list_all_tables()
}

fn list_key_pairs(repo: &Ec2) -> BoxFuture<'_, RepositoryResult<Vec<KeyPair>>> {
    repo.list_all_key_pairs()
}

fn list_clusters(repo: &Eks) -> BoxFuture<'_, RepositoryResult<Vec<String>>> {
    repo.list_all_clusters()
}

fn list_load_balancers(repo: &Elb) -> BoxFuture<'_, RepositoryResult<Vec<LoadBalancer>>> {
    repo.list_all_load_balancers()
}

fn list_aliases(repo: &Kms) -> BoxFuture<'_, RepositoryResult<Vec<KmsAlias>>> {
    repo.list_all_aliases()
}

fn list_keys(repo: &Kms) -> BoxFuture<'_, RepositoryResult<Vec<KmsKey>>> {
    repo.list_all_keys()
}

fn list_topics(repo: &Sns) -> BoxFuture<'_, RepositoryResult<Vec<SnsTopic>>> {
    repo.list_all_topics()
}

fn vpc_id(vpc: &Vpc) -> Option<&str> {
    vpc.vpc_id.as_deref()
}

#[allow(clippy::ptr_arg)]
fn bare_name(name: &String) -> Option<&str> {
    Some(name)
}

fn key_name(key_pair: &KeyPair) -> Option<&str> {
    key_pair.key_name.as_deref()
}

fn load_balancer_name(load_balancer: &LoadBalancer) -> Option<&str> {
    load_balancer.load_balancer_name.as_deref()
}

fn alias_name(alias: &KmsAlias) -> Option<&str> {
    alias.alias_name.as_deref()
}

fn key_id(key: &KmsKey) -> Option<&str> {
    key.key_id.as_deref()
}

fn topic_arn(topic: &SnsTopic) -> Option<&str> {
    topic.topic_arn.as_deref()
}
