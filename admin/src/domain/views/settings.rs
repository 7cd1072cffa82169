//! Store settings screen.

use std::sync::Arc;

use crate::domain::StoreSettings;
use crate::domain::ports::{Notifier, SettingsService};

use super::feedback::{Feedback, ViewError, required};

const LOAD_FAILED: &str = "Failed to load settings";
const SAVE_FAILED: &str = "Failed to save settings";

/// View state for store settings: the saved copy plus an editable draft.
pub struct SettingsView {
    service: Arc<dyn SettingsService>,
    feedback: Feedback,
    saved: StoreSettings,
    draft: StoreSettings,
    loading: bool,
}

impl SettingsView {
    /// Empty view bound to its service.
    pub fn new(service: Arc<dyn SettingsService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            feedback: Feedback::new(notifier),
            saved: StoreSettings::default(),
            draft: StoreSettings::default(),
            loading: false,
        }
    }

    /// Last loaded or saved settings.
    pub const fn saved(&self) -> &StoreSettings {
        &self.saved
    }

    /// Editable copy.
    pub const fn draft(&self) -> &StoreSettings {
        &self.draft
    }

    /// Whether a load is in flight.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the draft differs from the saved copy.
    pub fn is_dirty(&self) -> bool {
        self.saved != self.draft
    }

    /// Load the settings into both copies.
    pub async fn load(&mut self) -> Result<&StoreSettings, ViewError> {
        self.loading = true;
        let outcome = self.service.get().await;
        self.loading = false;
        if let Some(settings) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.draft = settings.clone();
            self.saved = settings;
        }
        Ok(&self.saved)
    }

    /// Edit the draft in place.
    pub fn edit(&mut self, change: impl FnOnce(&mut StoreSettings)) {
        change(&mut self.draft);
    }

    /// Save the draft. The store name is required.
    pub async fn save(&mut self) -> Result<&StoreSettings, ViewError> {
        required(Some(self.draft.store_name.as_str()), "store name")
            .map_err(|err| self.feedback.invalid(err))?;
        let outcome = self.service.update(&self.draft).await;
        let settings = self
            .feedback
            .settle(outcome, SAVE_FAILED)?
            .unwrap_or_else(|| self.draft.clone());
        self.draft = settings.clone();
        self.saved = settings;
        Ok(&self.saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, Envelope};
    use crate::domain::ports::{MockNotifier, MockSettingsService};

    fn settings() -> StoreSettings {
        StoreSettings {
            store_name: "Saree Sutra".into(),
            tagline: "Handwoven heritage".into(),
            email: "hello@example.test".into(),
            phone: "+91 90000 00000".into(),
            address: "Varanasi".into(),
            whatsapp: "919000000000".into(),
        }
    }

    fn notifier() -> Arc<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().return_const(());
        Arc::new(notifier)
    }

    #[tokio::test]
    async fn load_edit_save_cycle() {
        let mut service = MockSettingsService::new();
        service
            .expect_get()
            .times(1)
            .returning(|| Ok(Envelope::ok(settings())));
        service
            .expect_update()
            .withf(|draft| draft.tagline == "Woven in Banaras")
            .times(1)
            .returning(|draft| Ok(Envelope::ok(draft.clone())));
        let mut view = SettingsView::new(Arc::new(service), notifier());

        view.load().await.expect("load");
        view.edit(|draft| draft.tagline = "Woven in Banaras".into());
        assert!(view.is_dirty());

        let saved = view.save().await.expect("save");
        assert_eq!(saved.tagline, "Woven in Banaras");
        assert!(!view.is_dirty());
    }

    #[tokio::test]
    async fn failed_save_keeps_draft() {
        let mut service = MockSettingsService::new();
        service
            .expect_get()
            .returning(|| Ok(Envelope::ok(settings())));
        service
            .expect_update()
            .returning(|_| Err(ApiError::from_status(500, None)));
        let mut view = SettingsView::new(Arc::new(service), notifier());
        view.load().await.expect("load");
        view.edit(|draft| draft.phone = "+91 98888 88888".into());

        view.save().await.expect_err("server error");
        assert!(view.is_dirty());
        assert_eq!(view.saved().phone, "+91 90000 00000");
    }

    #[tokio::test]
    async fn blank_store_name_is_blocked() {
        let mut service = MockSettingsService::new();
        service.expect_update().never();
        let mut view = SettingsView::new(Arc::new(service), notifier());

        let err = view.save().await.expect_err("blocked");
        assert!(matches!(err, ViewError::Form(_)));
    }
}
