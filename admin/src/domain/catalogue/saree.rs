//! Saree inventory records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ImageUpload;

/// A saree listed in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saree {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Price in rupees.
    #[serde(default)]
    pub price: f64,
    /// Identifier of the catalog the saree is filed under.
    #[serde(default)]
    pub category: Option<String>,
    /// Fabric, e.g. silk.
    #[serde(default)]
    pub fabric: String,
    /// Dominant colour.
    #[serde(default)]
    pub color: String,
    /// Weave or embroidery work.
    #[serde(default)]
    pub work: String,
    /// Hosted image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The slice of a saree embedded in catalog membership lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SareeSummary {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Price in rupees.
    #[serde(default)]
    pub price: Option<f64>,
    /// Dominant colour.
    #[serde(default)]
    pub color: Option<String>,
    /// Hosted image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Write-side saree fields sent as multipart form data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SareeFields {
    /// Display name.
    pub name: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Price in rupees.
    pub price: Option<f64>,
    /// Catalog identifier.
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
