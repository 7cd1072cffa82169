//! Contact inquiries submitted through the storefront.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Handling state of an inquiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    /// Nobody has picked it up yet.
    #[default]
    Pending,
    /// Someone is working on it.
    InProgress,
    /// Answered.
    Resolved,
}

impl ContactStatus {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown contact status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact status \"{0}\"; expected pending, in-progress or resolved")]
pub struct ContactStatusParseError(String);

impl FromStr for ContactStatus {
    type Err = ContactStatusParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ContactStatusParseError(raw.to_owned())),
        }
    }
}

/// An inquiry received through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Backend identifier.
    pub id: String,
    /// Sender name.
    #[serde(default)]
    pub name: String,
    /// Sender email.
    #[serde(default)]
    pub email: String,
    /// Sender phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: String,
    /// Handling state.
    #[serde(default)]
    pub status: ContactStatus,
    /// Internal note.
    #[serde(default)]
    pub note: Option<String>,
    /// Admin who answered.
    #[serde(default)]
    pub responded_by: Option<String>,
    /// Submission timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update of an inquiry sent as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactUpdate {
    /// New handling state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    /// Replacement internal note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pending", ContactStatus::Pending)]
    #[case("In-Progress", ContactStatus::InProgress)]
    #[case("in_progress", ContactStatus::InProgress)]
    #[case(" resolved ", ContactStatus::Resolved)]
    fn parses_statuses(#[case] raw: &str, #[case] expected: ContactStatus) {
        assert_eq!(raw.parse::<ContactStatus>(), Ok(expected));
    }

    #[test]
    fn update_omits_absent_fields() {
        let body = serde_json::to_value(ContactUpdate {
            status: Some(ContactStatus::InProgress),
            note: None,
        })
        .expect("serialises");
        assert_eq!(body, serde_json::json!({ "status": "in-progress" }));
    }
}
