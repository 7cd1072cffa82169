//! Query-side pagination parameters.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page size the admin API accepts.
pub const MAX_LIMIT: u32 = 100;

/// Validation errors returned by [`PageRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers are one-based.
    #[error("page numbers start at 1")]
    ZeroPage,
    /// The page size is zero or above [`MAX_LIMIT`].
    #[error("limit must be between 1 and {max}")]
    LimitOutOfRange {
        /// Largest accepted page size.
        max: u32,
    },
}

/// A one-based page number and page size.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= limit <= MAX_LIMIT`
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(2, 25).expect("valid page");
/// assert_eq!(request.query_pairs(), [("page", "2".to_owned()), ("limit", "25".to_owned())]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validate and construct a page request.
    pub const fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(PageRequestError::LimitOutOfRange { max: MAX_LIMIT });
        }
        Ok(Self { page, limit })
    }

    /// First page with [`DEFAULT_LIMIT`] entries.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Same page size, different page number.
    pub const fn with_page(self, page: u32) -> Result<Self, PageRequestError> {
        Self::new(page, self.limit)
    }

    /// Jump back to the first page, keeping the page size.
    #[must_use]
    pub const fn rewind(self) -> Self {
        Self {
            page: 1,
            limit: self.limit,
        }
    }

    /// The following page. Saturates at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            limit: self.limit,
        }
    }

    /// The preceding page, or `None` on the first page.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        if self.page <= 1 {
            None
        } else {
            Some(Self {
                page: self.page - 1,
                limit: self.limit,
            })
        }
    }

    /// Query parameters in the order the admin API documents them.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Append `page` and `limit` to an existing URL.
    pub fn append_to(&self, url: &mut Url) {
        url.query_pairs_mut().extend_pairs(self.query_pairs());
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} (limit {})", self.page, self.limit)
    }
}
