//! Collection endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;

use super::client::{ApiClient, ApiRequest};
use super::form::MultipartFields;
use crate::domain::ports::{CollectionService, ListQuery};
use crate::domain::{Acknowledgement, ApiError, Collection, CollectionFields, Envelope};

/// [`CollectionService`] over `admin/collections`.
pub struct HttpCollectionService {
    client: Arc<ApiClient>,
}

impl HttpCollectionService {
    /// Service sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn collection_form(fields: &CollectionFields) -> MultipartFields {
    MultipartFields::default()
        .text("name", fields.name.as_deref())
        .text("description", fields.description.as_deref())
        .text("featured", fields.featured)
        .file("image", fields.image.as_ref())
}

#[async_trait]
impl CollectionService for HttpCollectionService {
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Collection>>, ApiError> {
        let request = ApiRequest::get(&["admin", "collections"]).with_query(query.to_pairs());
        self.client.send(request).await
    }

    async fn get(&self, id: &str) -> Result<Envelope<Collection>, ApiError> {
        self.client
            .send(ApiRequest::get(&["admin", "collections", id]))
            .await
    }

    async fn create(&self, fields: &CollectionFields) -> Result<Envelope<Collection>, ApiError> {
        let request = ApiRequest::post(&["admin", "collections"])
            .multipart(collection_form(fields))
            .show_success();
        self.client.send(request).await
    }

    async fn update(
        &self,
        id: &str,
        fields: &CollectionFields,
    ) -> Result<Envelope<Collection>, ApiError> {
        let request = ApiRequest::put(&["admin", "collections", id])
            .multipart(collection_form(fields))
            .show_success();
        self.client.send(request).await
    }

    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        let request = ApiRequest::delete(&["admin", "collections", id]).show_success();
        self.client.send(request).await
    }
}
