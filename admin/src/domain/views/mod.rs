//! View-state controllers for the admin screens.
//!
//! Each view owns a local snapshot of its resource, its filters and the form
//! being edited. Submissions validate locally, call the matching port and
//! reconcile the snapshot by id. Catalog membership edits are the exception
//! and refetch.

mod catalogs;
mod collections;
mod contacts;
mod dashboard;
mod feedback;
mod list_state;
mod profile;
mod reviews;
mod sarees;
mod settings;
mod testimonials;

pub use catalogs::CatalogsView;
pub use collections::CollectionsView;
pub use contacts::ContactsView;
pub use dashboard::DashboardView;
pub use feedback::{FilterParseError, FormError, ViewError};
pub use list_state::ListState;
pub use profile::ProfileView;
pub use reviews::{ReviewStatusFilter, ReviewsView};
pub use sarees::{SareeFilter, SareeForm, SareesView};
pub use settings::SettingsView;
pub use testimonials::{ActivityFilter, FeaturedFilter, TestimonialFilter, TestimonialsView};
