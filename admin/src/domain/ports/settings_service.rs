//! Driven port for store settings.

use async_trait::async_trait;

use crate::domain::{ApiError, Envelope, StoreSettings};

/// Read and replace `admin/settings`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Load the current settings.
    async fn get(&self) -> Result<Envelope<StoreSettings>, ApiError>;

    /// Save `settings`.
    async fn update(&self, settings: &StoreSettings) -> Result<Envelope<StoreSettings>, ApiError>;
}
