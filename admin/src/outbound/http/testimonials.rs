//! Testimonial endpoints. Bodies are JSON; absent fields are omitted.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;

use super::client::{ApiClient, ApiRequest};
use crate::domain::ports::{ListQuery, TestimonialService};
use crate::domain::{Acknowledgement, ApiError, Envelope, Testimonial, TestimonialFields};

/// [`TestimonialService`] over `admin/testimonials`.
pub struct HttpTestimonialService {
    client: Arc<ApiClient>,
}

impl HttpTestimonialService {
    /// Service sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TestimonialService for HttpTestimonialService {
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Testimonial>>, ApiError> {
        let request = ApiRequest::get(&["admin", "testimonials"]).with_query(query.to_pairs());
        self.client.send(request).await
    }

    async fn get(&self, id: &str) -> Result<Envelope<Testimonial>, ApiError> {
        self.client
            .send(ApiRequest::get(&["admin", "testimonials", id]))
            .await
    }

    async fn create(&self, fields: &TestimonialFields) -> Result<Envelope<Testimonial>, ApiError> {
        let request = ApiRequest::post(&["admin", "testimonials"])
            .json(fields)?
            .show_success();
        self.client.send(request).await
    }

    async fn update(
        &self,
        id: &str,
        fields: &TestimonialFields,
    ) -> Result<Envelope<Testimonial>, ApiError> {
        let request = ApiRequest::put(&["admin", "testimonials", id])
            .json(fields)?
            .show_success();
        self.client.send(request).await
    }

    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        let request = ApiRequest::delete(&["admin", "testimonials", id]).show_success();
        self.client.send(request).await
    }
}
