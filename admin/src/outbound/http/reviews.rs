//! Review moderation endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use serde::Serialize;

use super::client::{ApiClient, ApiRequest};
use crate::domain::ports::{ListQuery, ReviewService};
use crate::domain::{Acknowledgement, ApiError, Envelope, Review, ReviewToggle};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusBody {
    is_approved: bool,
}

/// [`ReviewService`] over `admin/reviews`.
pub struct HttpReviewService {
    client: Arc<ApiClient>,
}

impl HttpReviewService {
    /// Service sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReviewService for HttpReviewService {
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Review>>, ApiError> {
        let request = ApiRequest::get(&["admin", "reviews"]).with_query(query.to_pairs());
        self.client.send(request).await
    }

    async fn update_status(&self, id: &str, approved: bool) -> Result<Acknowledgement, ApiError> {
        let request = ApiRequest::put(&["admin", "reviews", id, "status"])
            .json(&StatusBody {
                is_approved: approved,
            })?
            .show_success();
        self.client.send(request).await
    }

    async fn toggle_featured(&self, id: &str) -> Result<Envelope<ReviewToggle>, ApiError> {
        let request = ApiRequest::put(&["admin", "reviews", id, "featured"]).show_success();
        self.client.send(request).await
    }

    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        let request = ApiRequest::delete(&["admin", "reviews", id]).show_success();
        self.client.send(request).await
    }
}
