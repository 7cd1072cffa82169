//! Dashboard statistics endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::{ApiClient, ApiRequest};
use crate::domain::ports::DashboardQuery;
use crate::domain::{ApiError, DashboardStats, Envelope};

/// [`DashboardQuery`] over `admin/dashboard/stats`.
pub struct HttpDashboardQuery {
    client: Arc<ApiClient>,
}

impl HttpDashboardQuery {
    /// Query sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardQuery for HttpDashboardQuery {
    async fn stats(&self) -> Result<Envelope<DashboardStats>, ApiError> {
        self.client
            .send(ApiRequest::get(&["admin", "dashboard", "stats"]))
            .await
    }
}
