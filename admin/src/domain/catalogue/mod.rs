//! Catalogue records managed from the back office.
//!
//! Records mirror the backend JSON with camelCase keys. Identifiers arrive as
//! `_id`, `id` or both; the HTTP adapter normalises them to `id` before these
//! types see the payload. The `*Fields` types are the write side: every
//! field is optional and absent fields are omitted from the request body.

mod catalog;
mod collection;
mod contact;
mod dashboard;
mod image;
mod review;
mod saree;
mod settings;
mod testimonial;

pub use catalog::{
    CATALOG_CAPACITY, Catalog, CatalogFields, CatalogMember, CatalogStatus,
    CatalogStatusParseError,
};
pub use collection::{Collection, CollectionFields};
pub use contact::{Contact, ContactStatus, ContactStatusParseError, ContactUpdate};
pub use dashboard::DashboardStats;
pub use image::ImageUpload;
pub use review::{Review, ReviewProduct, ReviewToggle};
pub use saree::{Saree, SareeFields, SareeSummary};
pub use settings::StoreSettings;
pub use testimonial::{Testimonial, TestimonialFields};

/// A record addressable by its backend identifier.
pub trait Record {
    /// Backend identifier.
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    self.id.as_str()
                }
            }
        )*
    };
}

impl_record!(Saree, Collection, Catalog, Testimonial, Review, Contact);
