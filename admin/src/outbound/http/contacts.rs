//! Contact enquiry endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;

use super::client::{ApiClient, ApiRequest};
use crate::domain::ports::{ContactService, ListQuery};
use crate::domain::{ApiError, Contact, ContactUpdate, Envelope};

/// [`ContactService`] over `admin/contacts`.
pub struct HttpContactService {
    client: Arc<ApiClient>,
}

impl HttpContactService {
    /// Service sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactService for HttpContactService {
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Contact>>, ApiError> {
        let request = ApiRequest::get(&["admin", "contacts"]).with_query(query.to_pairs());
        self.client.send(request).await
    }

    async fn get(&self, id: &str) -> Result<Envelope<Contact>, ApiError> {
        self.client.send(ApiRequest::get(&["admin", "contacts", id])).await
    }

    async fn update(&self, id: &str, update: &ContactUpdate) -> Result<Envelope<Contact>, ApiError> {
        let request = ApiRequest::put(&["admin", "contacts", id])
            .json(update)?
            .show_success();
        self.client.send(request).await
    }
}
