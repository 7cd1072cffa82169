//! Domain primitives, ports and state for the admin back office.
//!
//! Purpose: keep the rules of the back office (session lifecycle, error
//! broadcast, list reconciliation and form validation) independent of the
//! HTTP client, the token file and the command line. Adapters depend on this
//! module; it depends on none of them.
//!
//! Public surface:
//! - `ApiError` / `ApiErrorCode`: transport-agnostic failure of an admin call.
//! - `SessionStore`: token-backed session with its read model.
//! - `ErrorBroadcast` / `ErrorState`: process-wide error channel.
//! - `views`: per-resource view-state controllers.

pub mod auth;
pub mod catalogue;
pub mod envelope;
pub mod error;
pub mod error_channel;
pub mod ports;
pub mod session;
pub mod user;
pub mod views;

pub use self::auth::{BearerToken, LoginCredentials, LoginValidationError, TokenValidationError};
pub use self::catalogue::{
    CATALOG_CAPACITY, Catalog, CatalogFields, CatalogMember, CatalogStatus,
    CatalogStatusParseError, Collection, CollectionFields, Contact, ContactStatus,
    ContactStatusParseError, ContactUpdate, DashboardStats, ImageUpload, Record, Review,
    ReviewProduct, ReviewToggle, Saree, SareeFields, SareeSummary, StoreSettings, Testimonial,
    TestimonialFields,
};
pub use self::envelope::{Acknowledgement, Envelope};
pub use self::error::{ApiError, ApiErrorCode, GENERIC_ERROR_MESSAGE};
pub use self::error_channel::{ErrorBroadcast, ErrorSignal, ErrorSink, ErrorState};
pub use self::session::{SessionPhase, SessionSnapshot, SessionStore};
pub use self::user::{AdminUser, ProfileUpdate};
