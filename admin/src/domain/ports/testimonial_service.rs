//! Driven port for the testimonial endpoints.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Acknowledgement, ApiError, Envelope, Testimonial, TestimonialFields};

use super::ListQuery;

/// CRUD over `admin/testimonials`. Bodies are JSON.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestimonialService: Send + Sync {
    /// List testimonials matching `query`.
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Testimonial>>, ApiError>;

    /// Fetch one testimonial.
    async fn get(&self, id: &str) -> Result<Envelope<Testimonial>, ApiError>;

    /// Create a testimonial from the present fields.
    async fn create(&self, fields: &TestimonialFields)
    -> Result<Envelope<Testimonial>, ApiError>;

    /// Update the present fields of a testimonial.
    async fn update(
        &self,
        id: &str,
        fields: &TestimonialFields,
    ) -> Result<Envelope<Testimonial>, ApiError>;

    /// Delete a testimonial.
    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError>;
}
