//! Driven port for review moderation.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Acknowledgement, ApiError, Envelope, Review, ReviewToggle};

use super::ListQuery;

/// Moderation over `admin/reviews`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// List reviews; supports `status`, `search`, `page` and `limit`.
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Page<Review>>, ApiError>;

    /// Approve or reject a review.
    async fn update_status(&self, id: &str, approved: bool)
    -> Result<Acknowledgement, ApiError>;

    /// Flip the featured flag server-side.
    async fn toggle_featured(&self, id: &str) -> Result<Envelope<ReviewToggle>, ApiError>;

    /// Delete a review.
    async fn delete(&self, id: &str) -> Result<Acknowledgement, ApiError>;
}
