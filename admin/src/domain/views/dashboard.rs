//! Dashboard counters screen.

use std::sync::Arc;

use crate::domain::DashboardStats;
use crate::domain::ports::{DashboardQuery, Notifier};

use super::feedback::{Feedback, ViewError};

const LOAD_FAILED: &str = "Failed to load dashboard statistics";

/// View state for the dashboard.
pub struct DashboardView {
    query: Arc<dyn DashboardQuery>,
    feedback: Feedback,
    stats: DashboardStats,
}

impl DashboardView {
    /// Empty view bound to its query.
    pub fn new(query: Arc<dyn DashboardQuery>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            query,
            feedback: Feedback::new(notifier),
            stats: DashboardStats::default(),
        }
    }

    /// Load the counters.
    pub async fn load(&mut self) -> Result<&DashboardStats, ViewError> {
        let outcome = self.query.stats().await;
        if let Some(stats) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.stats = stats;
        }
        Ok(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Envelope;
    use crate::domain::ports::{MockDashboardQuery, MockNotifier};
    use serde_json::json;

    #[tokio::test]
    async fn loads_open_ended_counters() {
        let mut query = MockDashboardQuery::new();
        query.expect_stats().times(1).returning(|| {
            let stats = serde_json::from_value(json!({
                "totalSarees": 48,
                "pendingReviews": 3,
                "topCatalog": "Wedding",
            }))
            .expect("stats fixture");
            Ok(Envelope::ok(stats))
        });
        let mut view = DashboardView::new(Arc::new(query), Arc::new(MockNotifier::new()));

        let stats = view.load().await.expect("load");
        assert_eq!(stats.count("totalSarees"), Some(48));
        let keys: Vec<_> = stats.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, ["pendingReviews", "topCatalog", "totalSarees"]);
    }
}
