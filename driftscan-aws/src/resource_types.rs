//! AWS resource type tags

use driftscan_core::ResourceType;

pub const AWS_VPC: ResourceType = ResourceType::from_static("aws_vpc");
pub const AWS_DEFAULT_VPC: ResourceType = ResourceType::from_static("aws_default_vpc");
pub const AWS_DYNAMODB_TABLE: ResourceType = ResourceType::from_static("aws_dynamodb_table");
pub const AWS_KEY_PAIR: ResourceType = ResourceType::from_static("aws_key_pair");
pub const AWS_EKS_CLUSTER: ResourceType = ResourceType::from_static("aws_eks_cluster");
/// Classic load balancer
pub const AWS_ELB: ResourceType = ResourceType::from_static("aws_elb");
pub const AWS_KMS_ALIAS: ResourceType = ResourceType::from_static("aws_kms_alias");
pub const AWS_KMS_KEY: ResourceType = ResourceType::from_static("aws_kms_key");
pub const AWS_SNS_TOPIC: ResourceType = ResourceType::from_static("aws_sns_topic");
