//! Driven port for the collection endpoints.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Acknowledgement, ApiError, Collection, CollectionFields, Envelope};

use super::ListQuery;

/// CRUD over `admin/collections`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionService: Send + Sync {
    /// List collections matching `query`.
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Collection>>, ApiError>;

    /// Fetch one collection.
    async fn get(&self, id: &str) -> Result<Envelope<Collection>, ApiError>;

    /// Create a collection from the present fields.
    async fn create(&self, fields: &CollectionFields) -> Result<Envelope<Collection>, ApiError>;

    /// Update the present fields of a collection.
    async fn update(
        &self,
        id: &str,
        fields: &CollectionFields,
    ) -> Result<Envelope<Collection>, ApiError>;

    /// Delete a collection.
    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError>;
}
