//! Ports and state shared by every command.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogService, CollectionService, ContactService, DashboardQuery, Notifier, ReviewService,
    SareeService, SettingsService, TestimonialService,
};
use crate::domain::{ErrorState, SessionStore};

/// Everything a command needs, wired by the composition root.
pub struct AdminContext {
    /// Booted session.
    pub session: Arc<SessionStore>,
    /// Process-wide error state fed by the error broadcast.
    pub errors: Arc<ErrorState>,
    /// Inline feedback.
    pub notifier: Arc<dyn Notifier>,
    /// Saree inventory.
    pub sarees: Arc<dyn SareeService>,
    /// Collections.
    pub collections: Arc<dyn CollectionService>,
    /// Catalogs and membership.
    pub catalogs: Arc<dyn CatalogService>,
    /// Testimonials.
    pub testimonials: Arc<dyn TestimonialService>,
    /// Review moderation.
    pub reviews: Arc<dyn ReviewService>,
    /// Contact enquiries.
    pub contacts: Arc<dyn ContactService>,
    /// Store settings.
    pub settings: Arc<dyn SettingsService>,
    /// Dashboard counters.
    pub dashboard: Arc<dyn DashboardQuery>,
}
