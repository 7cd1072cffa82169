//! Query parameters accepted by list endpoints.

use pagination::PageRequest;

/// Filters and paging for a list call. Absent or blank values are omitted
/// from the query string.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
/// use saree_admin::domain::ports::ListQuery;
///
/// let query = ListQuery::default()
///     .with_page(PageRequest::first())
///     .with_status("pending")
///     .with_search("  ");
/// assert_eq!(
///     query.to_pairs(),
///     vec![
///         ("page", "1".to_owned()),
///         ("limit", "10".to_owned()),
///         ("status", "pending".to_owned()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Page to fetch; `None` lets the server choose.
    pub page: Option<PageRequest>,
    /// Free-text search.
    pub search: Option<String>,
    /// Status filter.
    pub status: Option<String>,
    /// Category filter.
    pub category: Option<String>,
    /// Collection filter.
    pub collection: Option<String>,
}

impl ListQuery {
    /// Set the page.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the status filter.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the collection filter.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Query pairs in a stable order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .page
            .map(|page| page.query_pairs().to_vec())
            .unwrap_or_default();
        let filters = [
            ("search", &self.search),
            ("status", &self.status),
            ("category", &self.category),
            ("collection", &self.collection),
        ];
        pairs.extend(filters.into_iter().filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| (key, value.to_owned()))
        }));
        pairs
    }
}
