//! Product reviews submitted by customers and moderated by admins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The reviewed product, as embedded in a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProduct {
    /// Product identifier.
    #[serde(default)]
    pub id: String,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Hosted image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// A customer review awaiting or past moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Backend identifier.
    pub id: String,
    /// Reviewer name.
    #[serde(default)]
    pub name: String,
    /// Reviewer email.
    #[serde(default)]
    pub email: String,
    /// Reviewer phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Reviewed product.
    #[serde(rename = "productId", default)]
    pub product: Option<ReviewProduct>,
    /// Product name captured at submission time.
    #[serde(default)]
    pub product_name: String,
    /// Star rating, 1 to 5.
    #[serde(default)]
    pub rating: u8,
    /// Review text.
    #[serde(default)]
    pub review: String,
    /// Whether moderation approved it.
    #[serde(default)]
    pub is_approved: bool,
    /// Whether the storefront highlights it.
    #[serde(default)]
    pub is_featured: bool,
    /// Number of "helpful" votes.
    #[serde(default)]
    pub helpful_count: u64,
    /// Submission timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Product label, preferring the embedded product name.
    pub fn product_label(&self) -> &str {
        self.product
            .as_ref()
            .map(|product| product.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.product_name.as_str())
    }
}

/// Payload returned by the featured toggle, e.g. `{ "message": "featured" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewToggle {
    /// Past-tense description of the new state.
    #[serde(default)]
    pub message: Option<String>,
}
