//! Driven port for contact inquiries.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{ApiError, Contact, ContactUpdate, Envelope};

use super::ListQuery;

/// Inquiry triage over `admin/contacts`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// List inquiries; supports `status`, `search`, `page` and `limit`.
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Contact>>, ApiError>;

    /// Fetch one inquiry.
    async fn get(&self, id: &str) -> Result<Envelope<Contact>, ApiError>;

    /// Patch status and/or note.
    async fn update(&self, id: &str, update: &ContactUpdate) -> Result<Envelope<Contact>, ApiError>;
}
