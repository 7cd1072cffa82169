//! Catalogs screen, including saree membership.
//!
//! Membership is derived data shared with the saree list, so membership
//! edits refetch both lists instead of reconciling locally.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::ports::{CatalogService, ListQuery, Notifier, SareeService};
use crate::domain::{CATALOG_CAPACITY, Catalog, CatalogFields, Saree};

use super::feedback::{Feedback, FormError, ViewError, required};
use super::list_state::ListState;

const LOAD_FAILED: &str = "Failed to load catalogs";
const SAREES_FAILED: &str = "Failed to fetch sarees";
const CREATE_FAILED: &str = "Failed to create catalog";
const UPDATE_FAILED: &str = "Failed to update catalog";
const DELETE_FAILED: &str = "Failed to delete catalog";
const ADD_FAILED: &str = "Failed to add saree to catalog";
const REMOVE_FAILED: &str = "Failed to remove saree from catalog";

/// View state for catalogs.
pub struct CatalogsView {
    catalogs: Arc<dyn CatalogService>,
    sarees: Arc<dyn SareeService>,
    feedback: Feedback,
    list: ListState<Catalog>,
    available: Vec<Saree>,
    expanded: BTreeSet<String>,
    editing: Option<String>,
}

impl CatalogsView {
    /// Empty view bound to its services.
    pub fn new(
        catalogs: Arc<dyn CatalogService>,
        sarees: Arc<dyn SareeService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalogs,
            sarees,
            feedback: Feedback::new(notifier),
            list: ListState::default(),
            available: Vec::new(),
            expanded: BTreeSet::new(),
            editing: None,
        }
    }

    /// Loaded catalogs.
    pub const fn list(&self) -> &ListState<Catalog> {
        &self.list
    }

    /// Sarees that can be added to a catalog.
    pub fn available_sarees(&self) -> &[Saree] {
        &self.available
    }

    /// Load catalogs and the saree picker.
    pub async fn load(&mut self) -> Result<(), ViewError> {
        self.load_catalogs().await?;
        self.load_sarees().await
    }

    async fn load_catalogs(&mut self) -> Result<(), ViewError> {
        self.list.set_loading(true);
        let outcome = self.catalogs.list(&ListQuery::default()).await;
        self.list.set_loading(false);
        if let Some(page) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.list.replace_all(page);
        }
        Ok(())
    }

    async fn load_sarees(&mut self) -> Result<(), ViewError> {
        let outcome = self.sarees.list(&ListQuery::default()).await;
        if let Some(page) = self.feedback.settle(outcome, SAREES_FAILED)? {
            self.available = page.into_parts().0;
        }
        Ok(())
    }

    /// Expand or collapse a catalog. Returns the new state.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_owned());
            true
        }
    }

    /// Whether a catalog is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Start a new catalog.
    pub fn begin_create(&mut self) -> CatalogFields {
        self.editing = None;
        CatalogFields::default()
    }

    /// Start editing `id`, returning the form prefilled from the record.
    pub fn begin_edit(&mut self, id: &str) -> Result<CatalogFields, ViewError> {
        let catalog = self.list.get(id).ok_or_else(|| self.feedback.unknown(id))?;
        let form = CatalogFields {
            name: Some(catalog.name.clone()),
            description: Some(catalog.description.clone()),
            status: Some(catalog.status),
            image: None,
        };
        self.editing = Some(id.to_owned());
        Ok(form)
    }

    /// Validate and submit the form, then reconcile the list.
    pub async fn submit(&mut self, mut form: CatalogFields) -> Result<&Catalog, ViewError> {
        form.name = Some(
            required(form.name.as_deref(), "name").map_err(|err| self.feedback.invalid(err))?,
        );
        match self.editing.clone() {
            None => {
                let outcome = self.catalogs.create(&form).await;
                let catalog = self.feedback.settle_data(outcome, CREATE_FAILED)?;
                Ok(self.list.append(catalog))
            }
            Some(id) => {
                let outcome = self.catalogs.update(&id, &form).await;
                let catalog = self.feedback.settle_data(outcome, UPDATE_FAILED)?;
                self.editing = None;
                Ok(self.list.upsert(catalog))
            }
        }
    }

    /// Delete a catalog and drop it locally.
    pub async fn delete(&mut self, id: &str) -> Result<(), ViewError> {
        let outcome = self.catalogs.delete(id).await;
        self.feedback.settle(outcome, DELETE_FAILED)?;
        self.list.remove(id);
        self.expanded.remove(id);
        Ok(())
    }

    /// Add a saree to a catalog, blocked locally when the catalog is full.
    pub async fn add_saree(&mut self, catalog_id: &str, saree_id: &str) -> Result<(), ViewError> {
        let catalog = self
            .list
            .get(catalog_id)
            .ok_or_else(|| self.feedback.unknown(catalog_id))?;
        if catalog.is_full() {
            return Err(self.feedback.invalid(FormError::CatalogFull {
                capacity: CATALOG_CAPACITY,
            }));
        }
        let saree_id = saree_id.trim();
        if saree_id.is_empty() {
            return Err(self.feedback.invalid(FormError::NoSareeSelected));
        }
        let outcome = self.catalogs.add_saree(catalog_id, saree_id).await;
        self.feedback.settle(outcome, ADD_FAILED)?;
        self.refresh_membership().await
    }

    /// Remove a saree from a catalog.
    pub async fn remove_saree(&mut self, catalog_id: &str, saree_id: &str) -> Result<(), ViewError> {
        let outcome = self.catalogs.remove_saree(catalog_id, saree_id).await;
        self.feedback.settle(outcome, REMOVE_FAILED)?;
        self.refresh_membership().await
    }

    async fn refresh_membership(&mut self) -> Result<(), ViewError> {
        self.load_sarees().await?;
        self.load_catalogs().await
    }
}
