//! Saree inventory screen.
//!
//! The form names a catalog by its display name; the view resolves it to the
//! catalog id before submitting, and maps ids back to names for editing and
//! filtering.

use std::sync::Arc;

use crate::domain::ports::{CatalogService, ListQuery, Notifier, SareeService};
use crate::domain::{Catalog, ImageUpload, Saree, SareeFields};

use super::feedback::{Feedback, FormError, ViewError, required};
use super::list_state::ListState;

const LOAD_FAILED: &str = "Failed to fetch sarees";
const CATALOGS_FAILED: &str = "Failed to fetch catalogs";
const CREATE_FAILED: &str = "Failed to create saree";
const UPDATE_FAILED: &str = "Failed to update saree";
const DELETE_FAILED: &str = "Failed to delete saree";

/// Create/edit form for a saree. `category` is a catalog **name**.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SareeForm {
    /// Display name.
    pub name: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Price in rupees.
    pub price: Option<f64>,
    /// Catalog name.
    pub category: Option<String>,
    /// Fabric.
    pub fabric: Option<String>,
    /// Dominant colour.
    pub color: Option<String>,
    /// Weave or embroidery work.
    pub work: Option<String>,
    /// Replacement image.
    pub image: Option<ImageUpload>,
}

impl SareeForm {
    /// Overlay the fields present in `changes`.
    #[must_use]
    pub fn merged(mut self, changes: Self) -> Self {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if changes.$field.is_some() { self.$field = changes.$field; })*
            };
        }
        overlay!(name, description, price, category, fabric, color, work, image);
        self
    }
}

/// Filters applied to the loaded list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SareeFilter {
    /// Case-insensitive name fragment.
    pub search: String,
    /// Catalog name; `None` or `"all"` shows every saree.
    pub catalog: Option<String>,
}

/// View state for the saree inventory.
pub struct SareesView {
    sarees: Arc<dyn SareeService>,
    catalogs: Arc<dyn CatalogService>,
    feedback: Feedback,
    list: ListState<Saree>,
    catalog_options: Vec<Catalog>,
    filter: SareeFilter,
    editing: Option<String>,
}

impl SareesView {
    /// Empty view bound to its services.
    pub fn new(
        sarees: Arc<dyn SareeService>,
        catalogs: Arc<dyn CatalogService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sarees,
            catalogs,
            feedback: Feedback::new(notifier),
            list: ListState::default(),
            catalog_options: Vec::new(),
            filter: SareeFilter::default(),
            editing: None,
        }
    }

    /// Loaded sarees.
    pub const fn list(&self) -> &ListState<Saree> {
        &self.list
    }

    /// Catalogs offered as categories.
    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalog_options
    }

    /// Identifier of the saree being edited.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Load sarees and the catalog options.
    pub async fn load(&mut self) -> Result<(), ViewError> {
        self.list.set_loading(true);
        let outcome = self.sarees.list(&ListQuery::default()).await;
        self.list.set_loading(false);
        if let Some(page) = self.feedback.settle(outcome, LOAD_FAILED)? {
            self.list.replace_all(page);
        }
        self.load_catalogs().await
    }

    async fn load_catalogs(&mut self) -> Result<(), ViewError> {
        let outcome = self.catalogs.list(&ListQuery::default()).await;
        if let Some(page) = self.feedback.settle(outcome, CATALOGS_FAILED)? {
            self.catalog_options = page.into_parts().0;
        }
        Ok(())
    }

    /// Replace the filters.
    pub fn set_filter(&mut self, filter: SareeFilter) {
        self.filter = filter;
    }

    /// Sarees matching the current filters.
    pub fn visible(&self) -> Vec<&Saree> {
        let needle = self.filter.search.trim().to_lowercase();
        let catalog = self
            .filter
            .catalog
            .as_deref()
            .filter(|name| !name.eq_ignore_ascii_case("all"));
        self.list
            .items()
            .iter()
            .filter(|saree| saree.name.to_lowercase().contains(&needle))
            .filter(|saree| catalog.is_none_or(|name| self.catalog_name_of(saree) == Some(name)))
            .collect()
    }

    /// Name of the catalog a saree is filed under.
    pub fn catalog_name_of(&self, saree: &Saree) -> Option<&str> {
        let id = saree.category.as_deref()?;
        self.catalog_options
            .iter()
            .find(|catalog| catalog.id == id)
            .map(|catalog| catalog.name.as_str())
    }

    /// Start a new saree.
    pub fn begin_create(&mut self) -> SareeForm {
        self.editing = None;
        SareeForm::default()
    }

    /// Start editing `id`, returning the form prefilled from the record.
    pub fn begin_edit(&mut self, id: &str) -> Result<SareeForm, ViewError> {
        let saree = self.list.get(id).ok_or_else(|| self.feedback.unknown(id))?;
        let form = SareeForm {
            name: Some(saree.name.clone()),
            description: Some(saree.description.clone()),
            price: Some(saree.price),
            category: self.catalog_name_of(saree).map(str::to_owned),
            fabric: Some(saree.fabric.clone()),
            color: Some(saree.color.clone()),
            work: Some(saree.work.clone()),
            image: None,
        };
        self.editing = Some(id.to_owned());
        Ok(form)
    }

    /// Validate and submit the form as a create or an update, then reconcile
    /// the list.
    pub async fn submit(&mut self, form: SareeForm) -> Result<&Saree, ViewError> {
        let fields = self.validate(form).map_err(|err| self.feedback.invalid(err))?;
        match self.editing.clone() {
            None => {
                let outcome = self.sarees.create(&fields).await;
                let saree = self.feedback.settle_data(outcome, CREATE_FAILED)?;
                Ok(self.list.append(saree))
            }
            Some(id) => {
                let outcome = self.sarees.update(&id, &fields).await;
                let saree = self.feedback.settle_data(outcome, UPDATE_FAILED)?;
                self.editing = None;
                Ok(self.list.upsert(saree))
            }
        }
    }

    /// Delete a saree and drop it locally.
    pub async fn delete(&mut self, id: &str) -> Result<(), ViewError> {
        let outcome = self.sarees.delete(id).await;
        self.feedback.settle(outcome, DELETE_FAILED)?;
        self.list.remove(id);
        Ok(())
    }

    fn validate(&self, form: SareeForm) -> Result<SareeFields, FormError> {
        let name = required(form.name.as_deref(), "name")?;
        let price = form.price.ok_or(FormError::MissingField { field: "price" })?;
        if !price.is_finite() || price < 0.0 {
            return Err(FormError::InvalidPrice { price });
        }
        let category = match form.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(
                self.catalog_options
                    .iter()
                    .find(|catalog| catalog.name == name)
                    .map(|catalog| catalog.id.clone())
                    .ok_or_else(|| FormError::UnknownCatalog {
                        name: name.to_owned(),
                    })?,
            ),
        };
        Ok(SareeFields {
            name: Some(name),
            description: form.description,
            price: Some(price),
            category,
            fabric: form.fabric,
            color: form.color,
            work: form.work,
            image: form.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockCatalogService, MockNotifier, MockSareeService};
    use crate::domain::{ApiError, Envelope};
    use pagination::Page;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn saree(id: &str, name: &str, category: Option<&str>) -> Saree {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "price": 4999.0,
            "category": category,
        }))
        .expect("saree fixture")
    }

    fn catalog(id: &str, name: &str) -> Catalog {
        serde_json::from_value(json!({ "id": id, "name": name })).expect("catalog fixture")
    }

    #[fixture]
    fn notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().return_const(());
        notifier.expect_success().return_const(());
        notifier
    }

    fn catalogs() -> MockCatalogService {
        let mut catalogs = MockCatalogService::new();
        catalogs.expect_list().returning(|_| {
            Ok(Envelope::ok(Page::new(
                vec![catalog("c1", "Wedding"), catalog("c2", "Festive")],
                None,
            )))
        });
        catalogs
    }

    async fn loaded(mut sarees: MockSareeService, notifier: MockNotifier) -> SareesView {
        sarees.expect_list().times(1).returning(|_| {
            Ok(Envelope::ok(Page::new(
                vec![
                    saree("s1", "Banarasi Silk", Some("c1")),
                    saree("s2", "Chanderi Cotton", Some("c2")),
                ],
                None,
            )))
        });
        let mut view = SareesView::new(Arc::new(sarees), Arc::new(catalogs()), Arc::new(notifier));
        view.load().await.expect("load");
        view
    }

    fn valid_form() -> SareeForm {
        SareeForm {
            name: Some("Kanjivaram".into()),
            price: Some(12_500.0),
            category: Some("Festive".into()),
            ..SareeForm::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_appends_once_with_resolved_catalog_id(notifier: MockNotifier) {
        let mut sarees = MockSareeService::new();
        sarees
            .expect_create()
            .withf(|fields| fields.category.as_deref() == Some("c2"))
            .times(1)
            .returning(|_| Ok(Envelope::ok(saree("s3", "Kanjivaram", Some("c2")))));
        let mut view = loaded(sarees, notifier).await;

        view.begin_create();
        view.submit(valid_form()).await.expect("created");

        assert_eq!(view.list().len(), 3);
        assert_eq!(view.list().items()[2].id, "s3");
    }

    #[rstest]
    #[tokio::test]
    async fn failed_create_leaves_list_untouched(notifier: MockNotifier) {
        let mut sarees = MockSareeService::new();
        sarees
            .expect_create()
            .times(1)
            .returning(|_| Err(ApiError::from_status(500, None)));
        let mut view = loaded(sarees, notifier).await;
        let before: Vec<_> = view.list().items().to_vec();

        let err = view.submit(valid_form()).await.expect_err("server failure");

        assert!(err.api_error().is_some());
        assert_eq!(view.list().items(), before.as_slice());
    }

    #[rstest]
    #[case::missing_name(SareeForm { name: None, ..valid_form() })]
    #[case::missing_price(SareeForm { price: None, ..valid_form() })]
    #[case::negative_price(SareeForm { price: Some(-1.0), ..valid_form() })]
    #[case::unknown_catalog(SareeForm { category: Some("Bridal".into()), ..valid_form() })]
    #[tokio::test]
    async fn invalid_forms_never_reach_the_network(#[case] form: SareeForm) {
        let mut sarees = MockSareeService::new();
        sarees.expect_create().never();
        let mut view = loaded(sarees, notifier()).await;

        let err = view.submit(form).await.expect_err("blocked");
        assert!(matches!(err, ViewError::Form(_)));
        assert_eq!(view.list().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn filters_by_search_and_catalog_name(notifier: MockNotifier) {
        let mut view = loaded(MockSareeService::new(), notifier).await;

        view.set_filter(SareeFilter {
            search: "SILK".into(),
            catalog: None,
        });
        assert_eq!(view.visible().len(), 1);

        view.set_filter(SareeFilter {
            search: String::new(),
            catalog: Some("Festive".into()),
        });
        let names: Vec<_> = view.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Chanderi Cotton"]);

        view.set_filter(SareeFilter {
            search: String::new(),
            catalog: Some("all".into()),
        });
        assert_eq!(view.visible().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn edit_prefills_catalog_name_and_replaces_record(notifier: MockNotifier) {
        let mut sarees = MockSareeService::new();
        sarees
            .expect_update()
            .withf(|id, fields| id == "s1" && fields.name.as_deref() == Some("Banarasi Gold"))
            .times(1)
            .returning(|_, _| Ok(Envelope::ok(saree("s1", "Banarasi Gold", Some("c1")))));
        let mut view = loaded(sarees, notifier).await;

        let form = view.begin_edit("s1").expect("known saree");
        assert_eq!(form.category.as_deref(), Some("Wedding"));

        let changes = SareeForm {
            name: Some("Banarasi Gold".into()),
            ..SareeForm::default()
        };
        let updated = view.submit(form.merged(changes)).await.expect("updated");
        assert_eq!(updated.name, "Banarasi Gold");
        assert_eq!(view.list().len(), 2);
        assert!(view.editing().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn accepted_update_succeeds_when_ids_diverge(notifier: MockNotifier) {
        let mut sarees = MockSareeService::new();
        sarees
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(Envelope::ok(saree("s1-rev", "Banarasi Gold", Some("c1")))));
        let mut view = loaded(sarees, notifier).await;

        let form = view.begin_edit("s1").expect("known saree");
        let updated = view.submit(form).await.expect("server accepted the update");

        assert_eq!(updated.id, "s1-rev");
        assert!(view.list().get("s1-rev").is_some());
        assert!(view.editing().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_locally(notifier: MockNotifier) {
        let mut sarees = MockSareeService::new();
        sarees
            .expect_delete()
            .times(1)
            .returning(|_| Ok(Envelope::ok(json!(null))));
        let mut view = loaded(sarees, notifier).await;

        view.delete("s1").await.expect("deleted");
        assert!(view.list().get("s1").is_none());
    }
}
