//! Catalog endpoints, including saree membership.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use serde::Serialize;

use super::client::{ApiClient, ApiRequest};
use super::form::MultipartFields;
use crate::domain::ports::{CatalogService, ListQuery};
use crate::domain::{Acknowledgement, ApiError, Catalog, CatalogFields, Envelope};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MembershipBody<'a> {
    saree_id: &'a str,
}

/// [`CatalogService`] over `admin/catalogs`.
pub struct HttpCatalogService {
    client: Arc<ApiClient>,
}

impl HttpCatalogService {
    /// Service sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn catalog_form(fields: &CatalogFields) -> MultipartFields {
    MultipartFields::default()
        .text("name", fields.name.as_deref())
        .text("description", fields.description.as_deref())
        .text("status", fields.status.map(|status| status.as_str()))
        .file("image", fields.image.as_ref())
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Catalog>>, ApiError> {
        let request = ApiRequest::get(&["admin", "catalogs"]).with_query(query.to_pairs());
        self.client.send(request).await
    }

    async fn get(&self, id: &str) -> Result<Envelope<Catalog>, ApiError> {
        self.client.send(ApiRequest::get(&["admin", "catalogs", id])).await
    }

    async fn create(&self, fields: &CatalogFields) -> Result<Envelope<Catalog>, ApiError> {
        let request = ApiRequest::post(&["admin", "catalogs"])
            .multipart(catalog_form(fields))
            .show_success();
        self.client.send(request).await
    }

    async fn update(&self, id: &str, fields: &CatalogFields) -> Result<Envelope<Catalog>, ApiError> {
        let request = ApiRequest::put(&["admin", "catalogs", id])
            .multipart(catalog_form(fields))
            .show_success();
        self.client.send(request).await
    }

    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        let request = ApiRequest::delete(&["admin", "catalogs", id]).show_success();
        self.client.send(request).await
    }

    async fn add_saree(&self, catalog_id: &str, saree_id: &str) -> Result<Acknowledgement, ApiError> {
        let request = ApiRequest::post(&["admin", "catalogs", catalog_id, "sarees"])
            .json(&MembershipBody { saree_id })?
            .show_success();
        self.client.send(request).await
    }

    async fn remove_saree(
        &self,
        catalog_id: &str,
        saree_id: &str,
    ) -> Result<Acknowledgement, ApiError> {
        let request =
            ApiRequest::delete(&["admin", "catalogs", catalog_id, "sarees", saree_id]).show_success();
        self.client.send(request).await
    }
}
