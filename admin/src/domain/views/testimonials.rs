//! Testimonials screen.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::ports::{ListQuery, Notifier, TestimonialService};
use crate::domain::{Testimonial, TestimonialFields};

use super::feedback::{Feedback, FilterParseError, FormError, ViewError, required};
use super::list_state::ListState;

const LOAD_FAILED: &str = "Failed to fetch testimonials";
const CREATE_FAILED: &str = "Failed to create testimonial";
const UPDATE_FAILED: &str = "Failed to update testimonial";
const DELETE_FAILED: &str = "Failed to delete testimonial";

/// Filter on the published flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityFilter {
    /// No filtering.
    #[default]
    All,
    /// Published only.
    Active,
    /// Unpublished only.
    Inactive,
}

impl FromStr for ActivityFilter {
    type Err = FilterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(FilterParseError::new(raw, "all, active, inactive")),
        }
    }
}

/// Filter on the featured flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeaturedFilter {
    /// No filtering.
    #[default]
    All,
    /// Featured only.
    Featured,
    /// Not featured only.
    NotFeatured,
}

impl FromStr for FeaturedFilter {
    type Err = FilterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "featured" => Ok(Self::Featured),
            "not-featured" => Ok(Self::NotFeatured),
            _ => Err(FilterParseError::new(raw, "all, featured, not-featured")),
        }
    }
}

/// Client-side filters for testimonials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialFilter {
    /// Case-insensitive fragment of the name or text.
    pub search: String,
    /// Published filter.
    pub activity: ActivityFilter,
    /// Featured filter.
    pub featured: FeaturedFilter,
}

impl TestimonialFilter {
    fn matches(&self, testimonial: &Testimonial) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = testimonial.name.to_lowercase().contains(&needle)
            || testimonial.review.to_lowercase().contains(&needle);
        let matches_activity = match self.activity {
            ActivityFilter::All => true,
            ActivityFilter::Active => testimonial.is_active,
            ActivityFilter::Inactive => !testimonial.is_active,
        };
        let matches_featured = match self.featured {
            FeaturedFilter::All => true,
            FeaturedFilter::Featured => testimonial.is_featured,
            FeaturedFilter::NotFeatured => !testimonial.is_featured,
        };
        matches_search && matches_activity && matches_featured
    }
}

/// View state for testimonials.
pub struct TestimonialsView {
    service: Arc<dyn TestimonialService>,
    feedback: Feedback,
    list: ListState<Testimonial>,
    filter: TestimonialFilter,
    editing: Option<String>,
}

impl TestimonialsView {
    /// Empty view bound to its service.
    pub fn new(service: Arc<dyn TestimonialService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            feedback: Feedback::new(notifier),
            list: ListState::default(),
            filter: TestimonialFilter::default(),
            editing: None,
        }
    }

    /// Loaded testimonials.
    pub const fn list(&self) -> &ListState<Testimonial> {
        &self.list
    }

    /// Load every testimonial.
    pub async fn load(&mut self) -> Result<(), ViewError> {
        self.list.set_loading(true);
        let outcome = self.service.list(&ListQuery::default()).await;
        self.list.set_loading(false);
        if let Some(page) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.list.replace_all(page);
        }
        Ok(())
    }

    /// Replace the filters.
    pub fn set_filter(&mut self, filter: TestimonialFilter) {
        self.filter = filter;
    }

    /// Testimonials matching the current filters.
    pub fn visible(&self) -> Vec<&Testimonial> {
        self.list
            .items()
            .iter()
            .filter(|testimonial| self.filter.matches(testimonial))
            .collect()
    }

    /// Start a new testimonial; the rating defaults to five stars.
    pub fn begin_create(&mut self) -> TestimonialFields {
        self.editing = None;
        TestimonialFields {
            rating: Some(5),
            ..TestimonialFields::default()
        }
    }

    /// Start editing `id`, returning the form prefilled from the record.
    pub fn begin_edit(&mut self, id: &str) -> Result<TestimonialFields, ViewError> {
        let testimonial = self.list.get(id).ok_or_else(|| self.feedback.unknown(id))?;
        let form = TestimonialFields {
            name: Some(testimonial.name.clone()),
            review: Some(testimonial.review.clone()),
            rating: Some(testimonial.rating),
            is_featured: Some(testimonial.is_featured),
            is_active: Some(testimonial.is_active),
        };
        self.editing = Some(id.to_owned());
        Ok(form)
    }

    /// Validate and submit the form, then reconcile the list.
    pub async fn submit(&mut self, form: TestimonialFields) -> Result<&Testimonial, ViewError> {
        let form = validate(form).map_err(|err| self.feedback.invalid(err))?;
        match self.editing.clone() {
            None => {
                let outcome = self.service.create(&form).await;
                let testimonial = self.feedback.settle_data(outcome, CREATE_FAILED)?;
                Ok(self.list.append(testimonial))
            }
            Some(id) => {
                let outcome = self.service.update(&id, &form).await;
                let testimonial = self.feedback.settle_data(outcome, UPDATE_FAILED)?;
                self.editing = None;
                Ok(self.list.upsert(testimonial))
            }
        }
    }

    /// Delete a testimonial and drop it locally.
    pub async fn delete(&mut self, id: &str) -> Result<(), ViewError> {
        let outcome = self.service.delete(id).await;
        self.feedback.settle(outcome, DELETE_FAILED)?;
        self.list.remove(id);
        Ok(())
    }
}

fn validate(mut form: TestimonialFields) -> Result<TestimonialFields, FormError> {
    form.name = Some(required(form.name.as_deref(), "name")?);
    form.review = Some(required(form.review.as_deref(), "review")?);
    let rating = form.rating.ok_or(FormError::MissingField { field: "rating" })?;
    if !(1..=5).contains(&rating) {
        return Err(FormError::RatingOutOfRange { rating });
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Envelope;
    use crate::domain::ports::{MockNotifier, MockTestimonialService};
    use pagination::Page;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn testimonial(id: &str, name: &str, active: bool, featured: bool) -> Testimonial {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "review": "Beautiful drape and quick delivery",
            "rating": 5,
            "isActive": active,
            "isFeatured": featured,
        }))
        .expect("testimonial fixture")
    }

    #[fixture]
    fn notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().return_const(());
        notifier
    }

    async fn loaded(mut service: MockTestimonialService, notifier: MockNotifier) -> TestimonialsView {
        service.expect_list().times(1).returning(|_| {
            Ok(Envelope::ok(Page::new(
                vec![
                    testimonial("t1", "Asha", true, true),
                    testimonial("t2", "Meera", true, false),
                    testimonial("t3", "Lakshmi", false, false),
                ],
                None,
            )))
        });
        let mut view = TestimonialsView::new(Arc::new(service), Arc::new(notifier));
        view.load().await.expect("load");
        view
    }

    #[rstest]
    #[case::all(TestimonialFilter::default(), 3)]
    #[case::active(TestimonialFilter { activity: ActivityFilter::Active, ..TestimonialFilter::default() }, 2)]
    #[case::inactive(TestimonialFilter { activity: ActivityFilter::Inactive, ..TestimonialFilter::default() }, 1)]
    #[case::featured(TestimonialFilter { featured: FeaturedFilter::Featured, ..TestimonialFilter::default() }, 1)]
    #[case::active_not_featured(
        TestimonialFilter {
            activity: ActivityFilter::Active,
            featured: FeaturedFilter::NotFeatured,
            ..TestimonialFilter::default()
        },
        1
    )]
    #[case::search_name(TestimonialFilter { search: "meera".into(), ..TestimonialFilter::default() }, 1)]
    #[case::search_text(TestimonialFilter { search: "DRAPE".into(), ..TestimonialFilter::default() }, 3)]
    #[tokio::test]
    async fn filters_combine(#[case] filter: TestimonialFilter, #[case] expected: usize) {
        let mut view = loaded(MockTestimonialService::new(), notifier()).await;
        view.set_filter(filter);
        assert_eq!(view.visible().len(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[tokio::test]
    async fn out_of_range_rating_is_blocked(#[case] rating: u8) {
        let mut service = MockTestimonialService::new();
        service.expect_create().never();
        let mut view = loaded(service, notifier()).await;

        let mut form = view.begin_create();
        form.name = Some("Priya".into());
        form.review = Some("Lovely".into());
        form.rating = Some(rating);
        let err = view.submit(form).await.expect_err("blocked");
        assert!(matches!(err, ViewError::Form(FormError::RatingOutOfRange { .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn create_appends_one_entry(notifier: MockNotifier) {
        let mut service = MockTestimonialService::new();
        service
            .expect_create()
            .withf(|fields| fields.rating == Some(5))
            .times(1)
            .returning(|_| Ok(Envelope::ok(testimonial("t4", "Priya", true, false))));
        let mut view = loaded(service, notifier).await;

        let mut form = view.begin_create();
        form.name = Some("Priya".into());
        form.review = Some("Lovely".into());
        view.submit(form).await.expect("created");
        assert_eq!(view.list().len(), 4);
    }

    #[test]
    fn parses_filter_keywords() {
        assert_eq!("not-featured".parse(), Ok(FeaturedFilter::NotFeatured));
        assert_eq!("Inactive".parse(), Ok(ActivityFilter::Inactive));
        assert!("sometimes".parse::<ActivityFilter>().is_err());
    }
}
