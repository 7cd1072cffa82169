//! Curated collections shown on the storefront.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ImageUpload;

/// A curated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Hosted cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Number of sarees in the collection.
    #[serde(default)]
    pub saree_count: u64,
    /// Whether the storefront highlights this collection.
    #[serde(default)]
    pub featured: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Write-side collection fields sent as multipart form data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionFields {
    /// Display name.
    pub name: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Featured flag.
    pub featured: Option<bool>,
    /// Replacement cover image.
    pub image: Option<ImageUpload>,
}
