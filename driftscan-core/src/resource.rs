//! Resource - Abstract records describing live cloud objects

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying a kind of cloud resource (e.g., "aws_vpc", "aws_key_pair")
///
/// Tags are defined once per resource kind, usually as constants:
///
/// ```
/// use driftscan_core::ResourceType;
///
/// const AWS_VPC: ResourceType = ResourceType::from_static("aws_vpc");
/// assert_eq!(AWS_VPC.as_str(), "aws_vpc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceType(Cow<'static, str>);

impl ResourceType {
    /// Create a tag from a static string, usable in `const` items
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ResourceType {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// Attribute value of a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

/// Attribute mapping carried by a resource
pub type Attributes = HashMap<String, Value>;

/// A live cloud object as seen by the scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Provider identity (e.g., vpc-xxx, key name, topic ARN)
    pub id: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Resource {
    pub fn new(resource_type: ResourceType, id: impl Into<String>) -> Self {
        Self {
            resource_type,
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// Builds abstract resources from a type tag, an identity and attributes
///
/// Implementations must be pure and must not fail for a non-empty identity.
pub trait ResourceFactory: Send + Sync {
    fn create_abstract_resource(
        &self,
        resource_type: ResourceType,
        id: String,
        attributes: Attributes,
    ) -> Resource;
}

/// Factory that builds the record as given
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultResourceFactory;

impl ResourceFactory for DefaultResourceFactory {
    fn create_abstract_resource(
        &self,
        resource_type: ResourceType,
        id: String,
        attributes: Attributes,
    ) -> Resource {
        Resource {
            resource_type,
            id,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AWS_SNS_TOPIC: ResourceType = ResourceType::from_static("aws_sns_topic");

    #[test]
    fn static_and_owned_types_compare_equal() {
        assert_eq!(AWS_SNS_TOPIC, ResourceType::new("aws_sns_topic"));
        assert_eq!(AWS_SNS_TOPIC.to_string(), "aws_sns_topic");
    }

    #[test]
    fn default_factory_keeps_identity_and_attributes() {
        let mut attributes = Attributes::new();
        attributes.insert("region".to_string(), Value::String("eu-west-3".to_string()));

        let resource = DefaultResourceFactory.create_abstract_resource(
            AWS_SNS_TOPIC,
            "arn:aws:sns:eu-west-3:123456789012:alerts".to_string(),
            attributes.clone(),
        );

        assert_eq!(resource.resource_type, AWS_SNS_TOPIC);
        assert_eq!(resource.id, "arn:aws:sns:eu-west-3:123456789012:alerts");
        assert_eq!(resource.attributes, attributes);
    }

    #[test]
    fn resource_serializes_type_as_plain_string() {
        let resource = Resource::new(AWS_SNS_TOPIC, "alerts")
            .with_attribute("fifo", Value::Bool(false));

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "aws_sns_topic");
        assert_eq!(json["id"], "alerts");
        assert_eq!(json["attributes"]["fifo"], false);

        let back: Resource = serde_json::from_value(json).unwrap();
        assert_eq!(back, resource);
    }
}
