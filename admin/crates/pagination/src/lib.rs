//! Page-number pagination primitives shared by the admin list endpoints.
//!
//! List endpoints accept `page` and `limit` query parameters and answer with
//! either a bare JSON array or an object holding exactly one array next to a
//! `pagination` block:
//!
//! ```json
//! { "reviews": [ ... ], "pagination": { "total": 42, "page": 2, "pages": 5 } }
//! ```
//!
//! [`PageRequest`] renders the query side and [`Page`] decodes both payload
//! shapes without knowing the resource-specific array key.

mod page;
mod request;

pub use page::{Page, PageDecodeError, Pagination};
pub use request::{DEFAULT_LIMIT, MAX_LIMIT, PageRequest, PageRequestError};
