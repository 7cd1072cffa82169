//! Local list snapshot reconciled by record id.

use pagination::{Page, Pagination};
use tracing::debug;

use crate::domain::catalogue::Record;

/// Records a view currently shows, plus loading and paging state.
///
/// Mutations reconcile by id instead of refetching the list.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    pagination: Option<Pagination>,
    loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            loading: false,
        }
    }
}

impl<T: Record> ListState<T> {
    /// Records in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Paging metadata from the last load.
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Whether a load is in flight.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) const fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Look up a record.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace everything with a freshly loaded page.
    pub fn replace_all(&mut self, page: Page<T>) {
        let (items, pagination) = page.into_parts();
        self.items = items;
        self.pagination = pagination;
    }

    /// Append a created record.
    pub fn append(&mut self, item: T) -> &T {
        self.items.push(item);
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Swap in the server's copy of an updated record, appending it when no
    /// local record shares its id.
    pub fn upsert(&mut self, item: T) -> &T {
        if let Some(index) = self.items.iter().position(|current| current.id() == item.id()) {
            self.items[index] = item;
            return &self.items[index];
        }
        debug!(id = item.id(), "updated record missing from local list");
        self.append(item)
    }

    /// Apply `update` to the record with `id`.
    pub fn update_with(&mut self, id: &str, update: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                update(item);
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        label: &'static str,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, label: &'static str) -> Row {
        Row {
            id: id.to_owned(),
            label,
        }
    }

    fn state() -> ListState<Row> {
        let mut state = ListState::default();
        state.replace_all(Page::new(vec![row("a", "one"), row("b", "two")], None));
        state
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut state = state();
        assert_eq!(state.upsert(row("b", "updated")).label, "updated");
        assert_eq!(state.get("b").map(|r| r.label), Some("updated"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn upsert_keeps_records_missing_locally() {
        let mut state = state();
        assert_eq!(state.upsert(row("z", "server copy")).id, "z");
        let ids: Vec<_> = state.items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "z"]);
    }

    #[test]
    fn remove_and_append_keep_order() {
        let mut state = state();
        assert!(state.remove("a").is_some());
        assert!(state.remove("a").is_none());
        state.append(row("c", "three"));
        let ids: Vec<_> = state.items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn update_with_reports_misses() {
        let mut state = state();
        assert!(state.update_with("a", |r| r.label = "patched"));
        assert!(!state.update_with("nope", |r| r.label = "never"));
        assert_eq!(state.get("a").map(|r| r.label), Some("patched"));
    }
}
