//! Customer testimonials curated by the shop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A testimonial displayed on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Backend identifier.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Testimonial text.
    #[serde(default)]
    pub review: String,
    /// Star rating, 1 to 5.
    #[serde(default)]
    pub rating: u8,
    /// Whether the storefront highlights it.
    #[serde(default)]
    pub is_featured: bool,
    /// Whether it is published.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Write-side testimonial fields sent as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialFields {
    /// Customer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Testimonial text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    /// Star rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Featured flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Published flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
