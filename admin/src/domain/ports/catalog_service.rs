//! Driven port for the catalog endpoints, including saree membership.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Acknowledgement, ApiError, Catalog, CatalogFields, Envelope};

use super::ListQuery;

/// CRUD over `admin/catalogs` plus membership edits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List catalogs matching `query`.
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Catalog>>, ApiError>;

    /// Fetch one catalog.
    async fn get(&self, id: &str) -> Result<Envelope<Catalog>, ApiError>;

    /// Create a catalog from the present fields.
    async fn create(&self, fields: &CatalogFields) -> Result<Envelope<Catalog>, ApiError>;

    /// Update the present fields of a catalog.
    async fn update(&self, id: &str, fields: &CatalogFields)
    -> Result<Envelope<Catalog>, ApiError>;

    /// Delete a catalog.
    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError>;

    /// Add a saree to a catalog.
    async fn add_saree(&self, catalog_id: &str, saree_id: &str)
    -> Result<Acknowledgement, ApiError>;

    /// Remove a saree from a catalog.
    async fn remove_saree(
        &self,
        catalog_id: &str,
        saree_id: &str,
    ) -> Result<Acknowledgement, ApiError>;
}
