//! Collections screen.

use std::sync::Arc;

use crate::domain::ports::{CollectionService, ListQuery, Notifier};
use crate::domain::{Collection, CollectionFields};

use super::feedback::{Feedback, ViewError, required};
use super::list_state::ListState;

const LOAD_FAILED: &str = "Failed to fetch collections";
const CREATE_FAILED: &str = "Failed to create collection";
const UPDATE_FAILED: &str = "Failed to update collection";
const DELETE_FAILED: &str = "Failed to delete collection";

/// View state for collections.
pub struct CollectionsView {
    service: Arc<dyn CollectionService>,
    feedback: Feedback,
    list: ListState<Collection>,
    editing: Option<String>,
}

impl CollectionsView {
    /// Empty view bound to its service.
    pub fn new(service: Arc<dyn CollectionService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            feedback: Feedback::new(notifier),
            list: ListState::default(),
            editing: None,
        }
    }

    /// Loaded collections.
    pub const fn list(&self) -> &ListState<Collection> {
        &self.list
    }

    /// Load every collection.
    pub async fn load(&mut self) -> Result<(), ViewError> {
        self.list.set_loading(true);
        let outcome = self.service.list(&ListQuery::default()).await;
        self.list.set_loading(false);
        if let Some(page) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.list.replace_all(page);
        }
        Ok(())
    }

    /// Start a new collection.
    pub fn begin_create(&mut self) -> CollectionFields {
        self.editing = None;
        CollectionFields::default()
    }

    /// Start editing `id`, returning the form prefilled from the record.
    pub fn begin_edit(&mut self, id: &str) -> Result<CollectionFields, ViewError> {
        let collection = self.list.get(id).ok_or_else(|| self.feedback.unknown(id))?;
        let form = CollectionFields {
            name: Some(collection.name.clone()),
            description: Some(collection.description.clone()),
            featured: Some(collection.featured),
            image: None,
        };
        self.editing = Some(id.to_owned());
        Ok(form)
    }

    /// Validate and submit the form, then reconcile the list.
    pub async fn submit(&mut self, mut form: CollectionFields) -> Result<&Collection, ViewError> {
        form.name = Some(
            required(form.name.as_deref(), "name").map_err(|err| self.feedback.invalid(err))?,
        );
        match self.editing.take() {
            None => {
                let outcome = self.service.create(&form).await;
                let collection = self.feedback.settle_data(outcome, CREATE_FAILED)?;
                Ok(self.list.append(collection))
            }
            Some(id) => {
                let outcome = self.service.update(&id, &form).await;
                let collection = match self.feedback.settle_data(outcome, UPDATE_FAILED) {
                    Ok(collection) => collection,
                    Err(err) => {
                        self.editing = Some(id);
                        return Err(err);
                    }
                };
                Ok(self.list.upsert(collection))
            }
        }
    }

    /// Flip the featured flag through an update.
    pub async fn toggle_featured(&mut self, id: &str) -> Result<&Collection, ViewError> {
        let current = self.list.get(id).ok_or_else(|| self.feedback.unknown(id))?;
        let fields = CollectionFields {
            featured: Some(!current.featured),
            ..CollectionFields::default()
        };
        let outcome = self.service.update(id, &fields).await;
        let collection = self.feedback.settle_data(outcome, UPDATE_FAILED)?;
        Ok(self.list.upsert(collection))
    }

    /// Delete a collection and drop it locally.
    pub async fn delete(&mut self, id: &str) -> Result<(), ViewError> {
        let outcome = self.service.delete(id).await;
        self.feedback.settle(outcome, DELETE_FAILED)?;
        self.list.remove(id);
        Ok(())
    }
}
