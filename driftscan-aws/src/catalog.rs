//! Assembly of the AWS enumerator set

use std::sync::Arc;

use driftscan_core::{Enumerator, ListEnumerator, ResourceFactory};

use crate::bindings;
use crate::network::NetworkListing;
use crate::repository::{DynamoDb, Ec2, Eks, Elb, Kms, Sns};

/// Repositories backing the AWS enumerators
#[derive(Clone)]
pub struct AwsRepositories {
    pub ec2: Arc<Ec2>,
    pub dynamodb: Arc<DynamoDb>,
    pub eks: Arc<Eks>,
    pub elb: Arc<Elb>,
    pub kms: Arc<Kms>,
    pub sns: Arc<Sns>,
}

/// Build the enumerators of every supported AWS resource type
///
/// The returned set is meant for one scan pass: both VPC enumerators share a
/// single [`NetworkListing`], so a successful VPC call is made once for the
/// whole set. Build a new set for the next pass.
pub fn enumerators(
    repositories: &AwsRepositories,
    factory: Arc<dyn ResourceFactory>,
) -> Vec<Arc<dyn Enumerator>> {
    let network = Arc::new(NetworkListing::new(Arc::clone(&repositories.ec2)));

    vec![
        Arc::new(ListEnumerator::new(
            Arc::clone(&network),
            Arc::clone(&factory),
            bindings::VPC,
        )),
        Arc::new(ListEnumerator::new(
            network,
            Arc::clone(&factory),
            bindings::DEFAULT_VPC,
        )),
        Arc::new(ListEnumerator::new(
            Arc::clone(&repositories.dynamodb),
            Arc::clone(&factory),
            bindings::DYNAMODB_TABLE,
        )),
        Arc::new(ListEnumerator::new(
            Arc::clone(&repositories.ec2),
            Arc::clone(&factory),
            bindings::KEY_PAIR,
        )),
        Arc::new(ListEnumerator::new(
            Arc::clone(&repositories.eks),
            Arc::clone(&factory),
            bindings::EKS_CLUSTER,
        )),
        Arc::new(ListEnumerator::new(
            Arc::clone(&repositories.elb),
            Arc::clone(&factory),
            bindings::ELB,
        )),
        Arc::new(ListEnumerator::new(
            Arc::clone(&repositories.kms),
            Arc::clone(&factory),
            bindings::KMS_ALIAS,
        )),
        Arc::new(ListEnumerator::new(
            Arc::clone(&repositories.kms),
            Arc::clone(&factory),
            bindings::KMS_KEY,
        )),
        Arc::new(ListEnumerator::new(
            Arc::clone(&repositories.sns),
            factory,
            bindings::SNS_TOPIC,
        )),
    ]
}
