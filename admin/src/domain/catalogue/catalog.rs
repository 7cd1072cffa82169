//! Catalogs group up to [`CATALOG_CAPACITY`] sarees for the storefront.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ImageUpload, SareeSummary};

/// Maximum number of sarees a catalog may hold.
pub const CATALOG_CAPACITY: usize = 6;

/// Publication state of a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    /// Not yet visible on the storefront.
    #[default]
    Draft,
    /// Published.
    Active,
    /// Retired but kept for reference.
    Archived,
}

impl CatalogStatus {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown catalog status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog status \"{0}\"; expected draft, active or archived")]
pub struct CatalogStatusParseError(String);

impl FromStr for CatalogStatus {
    type Err = CatalogStatusParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(CatalogStatusParseError(raw.to_owned())),
        }
    }
}

/// A catalog member: populated saree details, or a bare id when the backend
/// did not expand the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogMember {
    /// Expanded saree reference.
    Saree(SareeSummary),
    /// Unexpanded saree id.
    Id(String),
}

impl CatalogMember {
    /// Identifier of the member saree.
    pub fn id(&self) -> &str {
        match self {
            Self::Saree(summary) => summary.id.as_str(),
            Self::Id(id) => id.as_str(),
        }
    }

    /// Name, when the reference was expanded.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Saree(summary) => Some(summary.name.as_str()),
            Self::Id(_) => None,
        }
    }
}

/// A storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Backend identifier.
    pub id: String,
    /// Display name; sarees use it as their category label.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Hosted cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Publication state.
    #[serde(default)]
    pub status: CatalogStatus,
    /// Member sarees.
    #[serde(rename = "sareeIds", default)]
    pub members: Vec<CatalogMember>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// Whether the catalog already holds [`CATALOG_CAPACITY`] sarees.
    pub fn is_full(&self) -> bool {
        self.members.len() >= CATALOG_CAPACITY
    }

    /// Whether `saree_id` is already a member.
    pub fn contains(&self, saree_id: &str) -> bool {
        self.members.iter().any(|member| member.id() == saree_id)
    }
}

/// Write-side catalog fields sent as multipart form data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFields {
    /// Display name.
    pub name: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Publication state.
    pub status: Option<CatalogStatus>,
    /// Replacement cover image.
    pub image: Option<ImageUpload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_populated_and_bare_members() {
        let catalog: Catalog = serde_json::from_value(json!({
            "id": "c1",
            "name": "Wedding",
            "status": "active",
            "sareeIds": [
                { "id": "s1", "name": "Paithani", "price": 18999 },
                "s2"
            ]
        }))
        .expect("catalog decodes");

        assert_eq!(catalog.status, CatalogStatus::Active);
        assert_eq!(catalog.members.len(), 2);
        assert_eq!(catalog.members[0].name(), Some("Paithani"));
        assert!(catalog.contains("s2"));
        assert!(!catalog.is_full());
    }

    #[test]
    fn parses_status_case_insensitively() {
        assert_eq!("Archived".parse::<CatalogStatus>(), Ok(CatalogStatus::Archived));
        assert!("live".parse::<CatalogStatus>().is_err());
    }
}
