//! Admin profile editor.

use std::sync::Arc;

use crate::domain::ports::Notifier;
use crate::domain::session::SessionStore;
use crate::domain::{AdminUser, ProfileUpdate};

use super::feedback::{Feedback, FormError, ViewError};

const UPDATE_FAILED: &str = "Failed to update profile";

/// Edits the signed-in admin's profile through the session store.
pub struct ProfileView {
    session: Arc<SessionStore>,
    feedback: Feedback,
}

impl ProfileView {
    /// View over `session`.
    pub fn new(session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session,
            feedback: Feedback::new(notifier),
        }
    }

    /// Submit the present fields. An empty update is blocked locally.
    pub async fn submit(&self, update: &ProfileUpdate) -> Result<AdminUser, ViewError> {
        if update.is_empty() {
            return Err(self.feedback.invalid(FormError::NothingToUpdate));
        }
        let outcome = self.session.update_profile(update).await;
        let payload = self.feedback.settle_data(outcome, UPDATE_FAILED)?;
        payload.user.ok_or(ViewError::EmptyResponse {
            action: UPDATE_FAILED,
        })
    }
}
