//! Saree inventory endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;

use super::client::{ApiClient, ApiRequest};
use super::form::MultipartFields;
use crate::domain::ports::{ListQuery, SareeService};
use crate::domain::{Acknowledgement, ApiError, Envelope, Saree, SareeFields};

const RESOURCE: [&str; 2] = ["admin", "sarees"];

/// [`SareeService`] over `admin/sarees`.
pub struct HttpSareeService {
    client: Arc<ApiClient>,
}

impl HttpSareeService {
    /// Service sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn saree_form(fields: &SareeFields) -> MultipartFields {
    MultipartFields::default()
        .text("name", fields.name.as_deref())
        .text("description", fields.description.as_deref())
        .text("price", fields.price)
        .text("category", fields.category.as_deref())
        .text("fabric", fields.fabric.as_deref())
        .text("color", fields.color.as_deref())
        .text("work", fields.work.as_deref())
        .file("image", fields.image.as_ref())
}

#[async_trait]
impl SareeService for HttpSareeService {
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Saree>>, ApiError> {
        let request = ApiRequest::get(&RESOURCE).with_query(query.to_pairs());
        self.client.send(request).await
    }

    async fn get(&self, id: &str) -> Result<Envelope<Saree>, ApiError> {
        self.client.send(ApiRequest::get(&["admin", "sarees", id])).await
    }

    async fn create(&self, fields: &SareeFields) -> Result<Envelope<Saree>, ApiError> {
        let request = ApiRequest::post(&RESOURCE)
            .multipart(saree_form(fields))
            .show_success();
        self.client.send(request).await
    }

    async fn update(&self, id: &str, fields: &SareeFields) -> Result<Envelope<Saree>, ApiError> {
        let request = ApiRequest::put(&["admin", "sarees", id])
            .multipart(saree_form(fields))
            .show_success();
        self.client.send(request).await
    }

    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        let request = ApiRequest::delete(&["admin", "sarees", id]).show_success();
        self.client.send(request).await
    }
}
