//! Store settings endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::{ApiClient, ApiRequest};
use crate::domain::ports::SettingsService;
use crate::domain::{ApiError, Envelope, StoreSettings};

const SETTINGS: [&str; 2] = ["admin", "settings"];

/// [`SettingsService`] over `admin/settings`.
pub struct HttpSettingsService {
    client: Arc<ApiClient>,
}

impl HttpSettingsService {
    /// Service sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsService for HttpSettingsService {
    async fn get(&self) -> Result<Envelope<StoreSettings>, ApiError> {
        self.client.send(ApiRequest::get(&SETTINGS)).await
    }

    async fn update(&self, settings: &StoreSettings) -> Result<Envelope<StoreSettings>, ApiError> {
        let request = ApiRequest::put(&SETTINGS).json(settings)?.show_success();
        self.client.send(request).await
    }
}
