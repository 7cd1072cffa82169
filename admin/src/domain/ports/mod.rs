//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_gateway;
mod catalog_service;
mod collection_service;
mod contact_service;
mod dashboard_query;
mod list_query;
mod notifier;
mod review_service;
mod saree_service;
mod settings_service;
mod testimonial_service;
mod token_store;

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
pub use auth_gateway::{AuthGateway, LoginPayload, ProfilePayload};
#[cfg(test)]
pub use catalog_service::MockCatalogService;
pub use catalog_service::CatalogService;
#[cfg(test)]
pub use collection_service::MockCollectionService;
pub use collection_service::CollectionService;
#[cfg(test)]
pub use contact_service::MockContactService;
pub use contact_service::ContactService;
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::DashboardQuery;
pub use list_query::ListQuery;
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{Notice, NoticeKind, Notifier, RecordingNotifier};
#[cfg(test)]
pub use review_service::MockReviewService;
pub use review_service::ReviewService;
#[cfg(test)]
pub use saree_service::MockSareeService;
pub use saree_service::SareeService;
#[cfg(test)]
pub use settings_service::MockSettingsService;
pub use settings_service::SettingsService;
#[cfg(test)]
pub use testimonial_service::MockTestimonialService;
pub use testimonial_service::TestimonialService;
#[cfg(test)]
pub use token_store::MockTokenStore;
pub use token_store::{InMemoryTokenStore, TokenStore, TokenStoreError};
