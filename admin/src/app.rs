//! Composition root: configuration in, wired command context out.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::{AdminSettings, ConfigError};
use crate::domain::ports::Notifier;
use crate::domain::{ErrorBroadcast, ErrorState, SessionStore};
use crate::inbound::cli::{AdminContext, Cli};
use crate::outbound::http::{
    ApiClient, HttpAuthGateway, HttpCatalogService, HttpCollectionService, HttpContactService,
    HttpDashboardQuery, HttpReviewService, HttpSareeService, HttpSettingsService,
    HttpTestimonialService,
};
use crate::outbound::token_store::FileTokenStore;

/// Failures while assembling the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Let command-line flags win over file and environment settings.
pub fn apply_cli_overrides(mut settings: AdminSettings, cli: &Cli) -> AdminSettings {
    if let Some(base_url) = &cli.base_url {
        settings.base_url = Some(base_url.clone());
    }
    if let Some(token_dir) = &cli.token_dir {
        settings.token_dir = Some(token_dir.clone());
    }
    settings
}

/// Build every adapter and arm `channel` with a fresh error state.
///
/// The session is returned unbooted; callers boot it when the command needs
/// one.
///
/// # Errors
///
/// Returns [`AppError`] when the base URL is invalid or the HTTP client
/// cannot be built.
pub fn bootstrap(
    settings: &AdminSettings,
    channel: &ErrorBroadcast,
    notifier: Arc<dyn Notifier>,
) -> Result<AdminContext, AppError> {
    let base_url = settings.base_url()?;
    let token_dir = settings.token_dir();
    debug!(base_url = %base_url, token_dir = %token_dir.display(), "bootstrapping admin client");

    let errors = Arc::new(ErrorState::new());
    channel.arm(errors.clone());

    let tokens = Arc::new(FileTokenStore::new(token_dir));
    let client = Arc::new(ApiClient::new(
        base_url,
        settings.request_timeout(),
        tokens.clone(),
        channel.clone(),
        notifier.clone(),
    )?);
    let session = Arc::new(SessionStore::new(
        tokens,
        Arc::new(HttpAuthGateway::new(client.clone())),
    ));

    Ok(AdminContext {
        session,
        errors,
        notifier,
        sarees: Arc::new(HttpSareeService::new(client.clone())),
        collections: Arc::new(HttpCollectionService::new(client.clone())),
        catalogs: Arc::new(HttpCatalogService::new(client.clone())),
        testimonials: Arc::new(HttpTestimonialService::new(client.clone())),
        reviews: Arc::new(HttpReviewService::new(client.clone())),
        contacts: Arc::new(HttpContactService::new(client.clone())),
        settings: Arc::new(HttpSettingsService::new(client.clone())),
        dashboard: Arc::new(HttpDashboardQuery::new(client)),
    })
}
