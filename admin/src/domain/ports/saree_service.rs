//! Driven port for the saree inventory endpoints.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Acknowledgement, ApiError, Envelope, Saree, SareeFields};

use super::ListQuery;

/// CRUD over `admin/sarees`. Envelopes are returned as the server sent them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SareeService: Send + Sync {
    /// List sarees matching `query`.
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Saree>>, ApiError>;

    /// Fetch one saree.
    async fn get(&self, id: &str) -> Result<Envelope<Saree>, ApiError>;

    /// Create a saree from the present fields.
    async fn create(&self, fields: &SareeFields) -> Result<Envelope<Saree>, ApiError>;

    /// Update the present fields of a saree.
    async fn update(&self, id: &str, fields: &SareeFields) -> Result<Envelope<Saree>, ApiError>;

    /// Delete a saree.
    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError>;
}
