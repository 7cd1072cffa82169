//! Review moderation screen.
//!
//! Status filtering and paging happen server-side; search narrows the loaded
//! page locally. Moderation results are applied to the local copy.

use std::str::FromStr;
use std::sync::Arc;

use pagination::PageRequest;

use crate::domain::Review;
use crate::domain::ports::{ListQuery, Notifier, ReviewService};

use super::feedback::{Feedback, FilterParseError, ViewError};
use super::list_state::ListState;

const LOAD_FAILED: &str = "Failed to fetch reviews";
const STATUS_FAILED: &str = "Failed to update review status";
const FEATURED_FAILED: &str = "Failed to toggle featured status";
const DELETE_FAILED: &str = "Failed to delete review";

/// Server-side moderation filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewStatusFilter {
    /// Every review; no `status` parameter is sent.
    #[default]
    All,
    /// Approved reviews.
    Approved,
    /// Reviews awaiting moderation.
    Pending,
}

impl ReviewStatusFilter {
    const fn query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Approved => Some("approved"),
            Self::Pending => Some("pending"),
        }
    }
}

impl FromStr for ReviewStatusFilter {
    type Err = FilterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "approved" => Ok(Self::Approved),
            "pending" => Ok(Self::Pending),
            _ => Err(FilterParseError::new(raw, "all, approved, pending")),
        }
    }
}

/// View state for review moderation.
pub struct ReviewsView {
    service: Arc<dyn ReviewService>,
    notifier: Arc<dyn Notifier>,
    feedback: Feedback,
    list: ListState<Review>,
    status: ReviewStatusFilter,
    page: PageRequest,
    search: String,
}

impl ReviewsView {
    /// Empty view on the first page.
    pub fn new(service: Arc<dyn ReviewService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            feedback: Feedback::new(notifier.clone()),
            notifier,
            list: ListState::default(),
            status: ReviewStatusFilter::default(),
            page: PageRequest::first(),
            search: String::new(),
        }
    }

    /// Loaded page of reviews.
    pub const fn list(&self) -> &ListState<Review> {
        &self.list
    }

    /// Page the next load requests.
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    /// Change the server-side filter, returning to page one.
    pub const fn set_status(&mut self, status: ReviewStatusFilter) {
        self.status = status;
        self.page = self.page.rewind();
    }

    /// Request a different page on the next load.
    pub const fn set_page(&mut self, page: PageRequest) {
        self.page = page;
    }

    /// Narrow the loaded page by name, email, product or text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Load the current page with the current filter.
    pub async fn load(&mut self) -> Result<(), ViewError> {
        let mut query = ListQuery::default().with_page(self.page);
        if let Some(status) = self.status.query_value() {
            query = query.with_status(status);
        }
        self.list.set_loading(true);
        let outcome = self.service.list(&query).await;
        self.list.set_loading(false);
        if let Some(page) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.list.replace_all(page);
        }
        let served = self.list.pagination().map(|pagination| pagination.page);
        if let Some(Ok(page)) = served.map(|number| self.page.with_page(number)) {
            self.page = page;
        }
        Ok(())
    }

    /// Reviews on the loaded page that match the search.
    pub fn visible(&self) -> Vec<&Review> {
        let needle = self.search.trim().to_lowercase();
        self.list
            .items()
            .iter()
            .filter(|review| {
                [
                    review.name.as_str(),
                    review.email.as_str(),
                    review.product_label(),
                    review.review.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Approve or reject a review and mirror the result locally.
    pub async fn set_approved(&mut self, id: &str, approved: bool) -> Result<(), ViewError> {
        let outcome = self.service.update_status(id, approved).await;
        self.feedback.settle(outcome, STATUS_FAILED)?;
        self.list.update_with(id, |review| review.is_approved = approved);
        Ok(())
    }

    /// Flip the featured flag and mirror it locally.
    pub async fn toggle_featured(&mut self, id: &str) -> Result<bool, ViewError> {
        let outcome = self.service.toggle_featured(id).await;
        let toggle = self.feedback.settle(outcome, FEATURED_FAILED)?;
        if let Some(message) = toggle.and_then(|toggle| toggle.message) {
            self.notifier.success(&format!("Review {message}"));
        }
        let mut featured = false;
        self.list.update_with(id, |review| {
            review.is_featured = !review.is_featured;
            featured = review.is_featured;
        });
        Ok(featured)
    }

    /// Delete a review and drop it locally.
    pub async fn delete(&mut self, id: &str) -> Result<(), ViewError> {
        let outcome = self.service.delete(id).await;
        self.feedback.settle(outcome, DELETE_FAILED)?;
        self.list.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockNotifier, MockReviewService};
    use crate::domain::{ApiError, Envelope, ReviewToggle};
    use mockall::predicate::eq;
    use pagination::{Page, Pagination};
    use rstest::rstest;
    use serde_json::json;

    fn review(id: &str, approved: bool) -> Review {
        serde_json::from_value(json!({
            "id": id,
            "name": "Kavya",
            "email": "kavya@example.test",
            "productId": { "id": "p1", "name": "Paithani Silk" },
            "rating": 4,
            "review": "Rich colours",
            "isApproved": approved,
            "isFeatured": false,
        }))
        .expect("review fixture")
    }

    fn page_of(reviews: Vec<Review>, page: u32) -> Page<Review> {
        Page::new(
            reviews,
            Some(Pagination {
                total: 25,
                page,
                pages: 3,
            }),
        )
    }

    fn quiet_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().return_const(());
        notifier.expect_success().return_const(());
        notifier
    }

    #[rstest]
    #[case::all(ReviewStatusFilter::All, None)]
    #[case::pending(ReviewStatusFilter::Pending, Some("pending"))]
    #[case::approved(ReviewStatusFilter::Approved, Some("approved"))]
    #[tokio::test]
    async fn status_filter_is_sent_server_side(
        #[case] status: ReviewStatusFilter,
        #[case] expected: Option<&'static str>,
    ) {
        let mut service = MockReviewService::new();
        service
            .expect_list()
            .withf(move |query| {
                query.status.as_deref() == expected && query.page == Some(PageRequest::first())
            })
            .times(1)
            .returning(|_| Ok(Envelope::ok(page_of(vec![review("r1", false)], 1))));
        let mut view = ReviewsView::new(Arc::new(service), Arc::new(quiet_notifier()));

        view.set_page(PageRequest::first().next());
        view.set_status(status);
        view.load().await.expect("load");
        assert_eq!(view.list().pagination().map(|p| p.pages), Some(3));
    }

    #[tokio::test]
    async fn approval_and_featured_flip_locally() {
        let mut service = MockReviewService::new();
        service
            .expect_list()
            .returning(|_| Ok(Envelope::ok(page_of(vec![review("r1", false)], 1))));
        service
            .expect_update_status()
            .with(eq("r1"), eq(true))
            .times(1)
            .returning(|_, _| Ok(Envelope::ok(json!({}))));
        service.expect_toggle_featured().times(1).returning(|_| {
            Ok(Envelope::ok(ReviewToggle {
                message: Some("featured".into()),
            }))
        });
        let mut notifier = MockNotifier::new();
        notifier
            .expect_success()
            .with(eq("Review featured"))
            .times(1)
            .return_const(());
        let mut view = ReviewsView::new(Arc::new(service), Arc::new(notifier));
        view.load().await.expect("load");

        view.set_approved("r1", true).await.expect("approved");
        assert!(view.toggle_featured("r1").await.expect("toggled"));

        let review = view.list().get("r1").expect("still listed");
        assert!(review.is_approved);
        assert!(review.is_featured);
    }

    #[tokio::test]
    async fn failed_moderation_leaves_state() {
        let mut service = MockReviewService::new();
        service
            .expect_list()
            .returning(|_| Ok(Envelope::ok(page_of(vec![review("r1", false)], 1))));
        service
            .expect_update_status()
            .returning(|_, _| Err(ApiError::from_status(403, Some("Forbidden".into()))));
        let mut view = ReviewsView::new(Arc::new(service), Arc::new(quiet_notifier()));
        view.load().await.expect("load");

        view.set_approved("r1", true).await.expect_err("forbidden");
        assert_eq!(view.list().get("r1").map(|r| r.is_approved), Some(false));
    }

    #[tokio::test]
    async fn search_matches_product_names() {
        let mut service = MockReviewService::new();
        service
            .expect_list()
            .returning(|_| Ok(Envelope::ok(page_of(vec![review("r1", true)], 1))));
        let mut view = ReviewsView::new(Arc::new(service), Arc::new(quiet_notifier()));
        view.load().await.expect("load");

        view.set_search("paithani");
        assert_eq!(view.visible().len(), 1);
        view.set_search("banarasi");
        assert!(view.visible().is_empty());
    }
}
