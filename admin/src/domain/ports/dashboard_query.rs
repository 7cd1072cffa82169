//! Driven port for dashboard counters.

use async_trait::async_trait;

use crate::domain::{ApiError, DashboardStats, Envelope};

/// Reads `admin/dashboard/stats`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Load the counters.
    async fn stats(&self) -> Result<Envelope<DashboardStats>, ApiError>;
}
