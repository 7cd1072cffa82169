//! Response-side pagination: the `pagination` block and list payload decoding.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const PAGINATION_KEY: &str = "pagination";

/// Pagination metadata returned by list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records matching the filters.
    #[serde(default)]
    pub total: u64,
    /// One-based page number of this slice.
    #[serde(default)]
    pub page: u32,
    /// Number of pages available.
    #[serde(default)]
    pub pages: u32,
}

impl Pagination {
    /// Whether a page after this one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// Errors raised while interpreting a list payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageDecodeError {
    /// The payload is neither an array nor an object holding one.
    #[error("list payload must be an array or an object holding one array")]
    UnexpectedShape,
    /// The payload object holds more than one array.
    #[error("list payload holds {count} arrays; expected exactly one")]
    AmbiguousItems {
        /// Number of arrays found.
        count: usize,
    },
    /// The `pagination` block could not be decoded.
    #[error("invalid pagination block: {message}")]
    InvalidPagination {
        /// Decoder diagnostic.
        message: String,
    },
    /// A list entry could not be decoded.
    #[error("invalid list item: {message}")]
    InvalidItem {
        /// Decoder diagnostic.
        message: String,
    },
}

/// One slice of a list endpoint.
///
/// # Examples
/// ```
/// use pagination::Page;
/// use serde_json::json;
///
/// let page: Page<u32> = serde_json::from_value(json!({
///     "contacts": [1, 2],
///     "pagination": { "total": 12, "page": 1, "pages": 6 }
/// }))
/// .expect("decodes");
/// assert_eq!(page.items(), &[1, 2]);
/// assert_eq!(page.pagination().map(|p| p.pages), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// Build a page from decoded parts.
    pub const fn new(items: Vec<T>, pagination: Option<Pagination>) -> Self {
        Self { items, pagination }
    }

    /// Records in this slice.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Pagination metadata, when the endpoint sent any.
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Number of records in this slice.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the slice holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into records and pagination metadata.
    pub fn into_parts(self) -> (Vec<T>, Option<Pagination>) {
        (self.items, self.pagination)
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode either payload shape from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, PageDecodeError> {
        match value {
            Value::Array(items) => Ok(Self::new(decode_items(items)?, None)),
            Value::Object(map) => decode_object(map),
            _ => Err(PageDecodeError::UnexpectedShape),
        }
    }
}

fn decode_object<T: DeserializeOwned>(
    mut map: Map<String, Value>,
) -> Result<Page<T>, PageDecodeError> {
    let pagination = match map.remove(PAGINATION_KEY) {
        None | Some(Value::Null) => None,
        Some(raw) => Some(serde_json::from_value::<Pagination>(raw).map_err(|err| {
            PageDecodeError::InvalidPagination {
                message: err.to_string(),
            }
        })?),
    };

    let mut arrays = map.into_iter().filter_map(|(_, value)| match value {
        Value::Array(items) => Some(items),
        _ => None,
    });
    let items = arrays.next().ok_or(PageDecodeError::UnexpectedShape)?;
    let extra = arrays.count();
    if extra > 0 {
        return Err(PageDecodeError::AmbiguousItems { count: extra + 1 });
    }

    Ok(Page::new(decode_items(items)?, pagination))
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, PageDecodeError> {
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|err| PageDecodeError::InvalidItem {
                message: err.to_string(),
            })
        })
        .collect()
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn bare_arrays_have_no_pagination() {
        let page: Page<String> =
            serde_json::from_value(json!(["silk", "cotton"])).expect("decodes");
        assert_eq!(page.len(), 2);
        assert!(page.pagination().is_none());
    }

    #[test]
    fn wrapped_arrays_keep_their_pagination() {
        let page: Page<u8> = serde_json::from_value(json!({
            "reviews": [5, 4, 3],
            "pagination": { "total": 23, "page": 2, "pages": 3, "limit": 10 }
        }))
        .expect("decodes");

        let (items, pagination) = page.into_parts();
        assert_eq!(items, vec![5, 4, 3]);
        let pagination = pagination.expect("pagination present");
        assert_eq!(pagination.total, 23);
        assert!(pagination.has_next());
    }

    #[rstest]
    #[case(json!("nope"), PageDecodeError::UnexpectedShape)]
    #[case(json!({ "pagination": { "total": 0 } }), PageDecodeError::UnexpectedShape)]
    #[case(json!({ "a": [], "b": [] }), PageDecodeError::AmbiguousItems { count: 2 })]
    fn rejects_unusable_payloads(#[case] payload: Value, #[case] expected: PageDecodeError) {
        let err = Page::<u8>::from_value(payload).expect_err("payload must be rejected");
        assert_eq!(err, expected);
    }

    #[test]
    fn reports_bad_items() {
        let err = Page::<u8>::from_value(json!([1, "two"])).expect_err("bad item");
        assert!(matches!(err, PageDecodeError::InvalidItem { .. }));
    }
}
