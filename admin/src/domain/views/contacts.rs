//! Contact inquiry triage screen.
//!
//! Filtering and paging are server-side; any filter change returns to the
//! first page. Status and note edits patch only the edited field locally.

use std::sync::Arc;

use pagination::PageRequest;

use crate::domain::ports::{ContactService, ListQuery, Notifier};
use crate::domain::{Contact, ContactStatus, ContactUpdate};

use super::feedback::{Feedback, ViewError};
use super::list_state::ListState;

const LOAD_FAILED: &str = "Failed to load contacts";
const DETAILS_FAILED: &str = "Failed to load contact details";
const STATUS_FAILED: &str = "Failed to update contact status";
const NOTE_FAILED: &str = "Failed to update contact note";

/// View state for contact inquiries.
pub struct ContactsView {
    service: Arc<dyn ContactService>,
    feedback: Feedback,
    list: ListState<Contact>,
    status: Option<ContactStatus>,
    search: String,
    page: PageRequest,
    selected: Option<Contact>,
}

impl ContactsView {
    /// Empty view on the first page.
    pub fn new(service: Arc<dyn ContactService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            feedback: Feedback::new(notifier),
            list: ListState::default(),
            status: None,
            search: String::new(),
            page: PageRequest::first(),
            selected: None,
        }
    }

    /// Loaded page of inquiries.
    pub const fn list(&self) -> &ListState<Contact> {
        &self.list
    }

    /// Page the next load requests.
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    /// Inquiry opened with [`Self::view_details`].
    pub const fn selected(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    /// Filter by status; `None` shows all. Returns to page one.
    pub const fn set_status(&mut self, status: Option<ContactStatus>) {
        self.status = status;
        self.page = self.page.rewind();
    }

    /// Filter by free text. Returns to page one.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = self.page.rewind();
    }

    /// Request a different page on the next load.
    pub const fn set_page(&mut self, page: PageRequest) {
        self.page = page;
    }

    /// Load the current page with the current filters.
    pub async fn load(&mut self) -> Result<(), ViewError> {
        let mut query = ListQuery::default()
            .with_page(self.page)
            .with_search(self.search.clone());
        if let Some(status) = self.status {
            query = query.with_status(status.as_str());
        }
        self.list.set_loading(true);
        let outcome = self.service.list(&query).await;
        self.list.set_loading(false);
        if let Some(page) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.list.replace_all(page);
        }
        Ok(())
    }

    /// Fetch the full inquiry.
    pub async fn view_details(&mut self, id: &str) -> Result<&Contact, ViewError> {
        let outcome = self.service.get(id).await;
        let contact = self.feedback.settle_data(outcome, DETAILS_FAILED)?;
        Ok(&*self.selected.insert(contact))
    }

    /// Change the handling state.
    pub async fn update_status(&mut self, id: &str, status: ContactStatus) -> Result<(), ViewError> {
        let update = ContactUpdate {
            status: Some(status),
            note: None,
        };
        let outcome = self.service.update(id, &update).await;
        let updated = self.feedback.settle_data(outcome, STATUS_FAILED)?;
        self.list
            .update_with(id, |contact| contact.status = updated.status);
        self.selected = None;
        Ok(())
    }

    /// Replace the internal note.
    pub async fn update_note(&mut self, id: &str, note: &str) -> Result<(), ViewError> {
        let update = ContactUpdate {
            status: None,
            note: Some(note.to_owned()),
        };
        let outcome = self.service.update(id, &update).await;
        let updated = self.feedback.settle_data(outcome, NOTE_FAILED)?;
        self.list.update_with(id, |contact| contact.note = updated.note);
        self.selected = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, Envelope};
    use crate::domain::ports::{MockContactService, MockNotifier};
    use pagination::{Page, Pagination};
    use rstest::rstest;
    use serde_json::json;

    fn contact(id: &str, status: &str, note: Option<&str>) -> Contact {
        serde_json::from_value(json!({
            "id": id,
            "name": "Ravi",
            "email": "ravi@example.test",
            "subject": "Bulk order",
            "message": "Do you ship to Pune?",
            "status": status,
            "note": note,
        }))
        .expect("contact fixture")
    }

    fn notifier() -> Arc<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().return_const(());
        Arc::new(notifier)
    }

    fn listing() -> Result<Envelope<Page<Contact>>, ApiError> {
        Ok(Envelope::ok(Page::new(
            vec![contact("m1", "pending", Some("call back")), contact("m2", "resolved", None)],
            Some(Pagination {
                total: 12,
                page: 1,
                pages: 2,
            }),
        )))
    }

    #[rstest]
    #[case::status(|view: &mut ContactsView| view.set_status(Some(ContactStatus::InProgress)))]
    #[case::search(|view: &mut ContactsView| view.set_search("pune"))]
    fn filter_changes_return_to_page_one(#[case] change: fn(&mut ContactsView)) {
        let mut view = ContactsView::new(Arc::new(MockContactService::new()), notifier());
        view.set_page(PageRequest::first().next());
        assert_eq!(view.page().page(), 2);

        change(&mut view);
        assert_eq!(view.page().page(), 1);
    }

    #[tokio::test]
    async fn load_sends_filters_and_page() {
        let mut service = MockContactService::new();
        service
            .expect_list()
            .withf(|query| {
                query.to_pairs()
                    == vec![
                        ("page", "1".to_owned()),
                        ("limit", "10".to_owned()),
                        ("search", "pune".to_owned()),
                        ("status", "in-progress".to_owned()),
                    ]
            })
            .times(1)
            .returning(|_| listing());
        let mut view = ContactsView::new(Arc::new(service), notifier());
        view.set_search("pune");
        view.set_status(Some(ContactStatus::InProgress));

        view.load().await.expect("load");
        assert_eq!(view.list().len(), 2);
    }

    #[tokio::test]
    async fn status_update_patches_only_status() {
        let mut service = MockContactService::new();
        service.expect_list().returning(|_| listing());
        service
            .expect_update()
            .withf(|id, update| id == "m1" && update.note.is_none())
            .times(1)
            .returning(|_, _| Ok(Envelope::ok(contact("m1", "resolved", Some("server note")))));
        let mut view = ContactsView::new(Arc::new(service), notifier());
        view.load().await.expect("load");

        view.update_status("m1", ContactStatus::Resolved)
            .await
            .expect("updated");

        let patched = view.list().get("m1").expect("listed");
        assert_eq!(patched.status, ContactStatus::Resolved);
        assert_eq!(patched.note.as_deref(), Some("call back"));
    }

    #[tokio::test]
    async fn note_update_failure_keeps_state() {
        let mut service = MockContactService::new();
        service.expect_list().returning(|_| listing());
        service
            .expect_update()
            .returning(|_, _| Err(ApiError::timeout("no response in 30s")));
        let mut view = ContactsView::new(Arc::new(service), notifier());
        view.load().await.expect("load");

        view.update_note("m1", "emailed").await.expect_err("timeout");
        assert_eq!(
            view.list().get("m1").and_then(|c| c.note.as_deref()),
            Some("call back")
        );
    }

    #[tokio::test]
    async fn details_are_kept_as_selection() {
        let mut service = MockContactService::new();
        service
            .expect_get()
            .times(1)
            .returning(|id| Ok(Envelope::ok(contact(id, "pending", None))));
        let mut view = ContactsView::new(Arc::new(service), notifier());

        let opened = view.view_details("m9").await.expect("details");
        assert_eq!(opened.id, "m9");
        assert!(view.selected().is_some());
    }
}
