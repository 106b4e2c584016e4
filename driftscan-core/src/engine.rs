//! Engine - Generic enumerator driven by per-type bindings
//!
//! Every resource type differs only in its tag, the repository call it lists
//! with, and the field holding its identity. A [`Binding`] records those
//! three things and [`ListEnumerator`] does the rest.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::enumerator::{
    EnumerationCause, EnumerationError, EnumerationErrorKind, EnumerationResult, Enumerator,
};
use crate::repository::{BoxFuture, RepositoryResult};
use crate::resource::{Attributes, Resource, ResourceFactory, ResourceType};

/// Listing call of a binding: performs one repository call
pub type ListFn<R, T> = for<'a> fn(&'a R) -> BoxFuture<'a, RepositoryResult<Vec<T>>>;

/// Identity extractor of a binding: `None` when the item carries no identity
pub type IdentityFn<T> = for<'a> fn(&'a T) -> Option<&'a str>;

/// Configuration record describing how one resource type is enumerated
///
/// `R` is the repository (or shared listing) the binding reads, `T` the raw
/// item type it returns.
pub struct Binding<R: ?Sized, T> {
    /// Tag of the produced resources
    pub resource_type: ResourceType,
    /// Provider field the identity is read from, reported when it is missing
    pub identity_field: &'static str,
    pub list: ListFn<R, T>,
    pub identity: IdentityFn<T>,
    /// Classification applied when the listing call fails
    pub listing_failure: EnumerationErrorKind,
}

/// Enumerator listing one resource type through a [`Binding`]
pub struct ListEnumerator<R: ?Sized, T> {
    repository: Arc<R>,
    factory: Arc<dyn ResourceFactory>,
    binding: Binding<R, T>,
}

impl<R: ?Sized, T> ListEnumerator<R, T> {
    pub fn new(
        repository: Arc<R>,
        factory: Arc<dyn ResourceFactory>,
        binding: Binding<R, T>,
    ) -> Self {
        Self {
            repository,
            factory,
            binding,
        }
    }

    /// Turn fetched items into resources, in the order they were returned
    fn build_resources(&self, items: &[T]) -> EnumerationResult<Vec<Resource>> {
        let resource_type = &self.binding.resource_type;
        let mut resources = Vec::with_capacity(items.len());
        let mut seen = HashSet::with_capacity(items.len());

        for item in items {
            let id = (self.binding.identity)(item)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    EnumerationError::scanning(
                        resource_type.clone(),
                        EnumerationCause::MissingIdentity {
                            field: self.binding.identity_field,
                        },
                    )
                })?;

            if !seen.insert(id) {
                return Err(EnumerationError::scanning(
                    resource_type.clone(),
                    EnumerationCause::DuplicateIdentity { id: id.to_string() },
                ));
            }

            resources.push(self.factory.create_abstract_resource(
                resource_type.clone(),
                id.to_string(),
                Attributes::new(),
            ));
        }

        Ok(resources)
    }
}

#[async_trait]
impl<R, T> Enumerator for ListEnumerator<R, T>
where
    R: ?Sized + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    fn supported_type(&self) -> ResourceType {
        self.binding.resource_type.clone()
    }

    async fn enumerate(&self) -> EnumerationResult<Vec<Resource>> {
        let items = (self.binding.list)(self.repository.as_ref())
            .await
            .map_err(|cause| {
                EnumerationError::new(
                    self.binding.listing_failure,
                    self.binding.resource_type.clone(),
                    cause,
                )
            })?;

        self.build_resources(&items)
    }
}
