//! HTTP adapters for the admin REST API.
//!
//! Every adapter shares one [`ApiClient`], which attaches the bearer token,
//! maps failures onto `ApiError` and broadcasts them. The adapters only
//! choose the method, path and body for each port operation.

mod auth;
mod catalogs;
mod client;
mod collections;
mod contacts;
mod dashboard;
mod dto;
mod form;
mod reviews;
mod sarees;
mod settings;
mod testimonials;

pub use auth::HttpAuthGateway;
pub use catalogs::HttpCatalogService;
pub use client::ApiClient;
pub use collections::HttpCollectionService;
pub use contacts::HttpContactService;
pub use dashboard::HttpDashboardQuery;
pub use reviews::HttpReviewService;
pub use sarees::HttpSareeService;
pub use settings::HttpSettingsService;
pub use testimonials::HttpTestimonialService;
