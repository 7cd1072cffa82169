//! Admin account model.

use serde::{Deserialize, Serialize};

use super::catalogue::ImageUpload;

/// The signed-in administrator as returned by the login and profile
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// Backend identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name; older accounts only carry `fullName`.
    #[serde(default, alias = "fullName")]
    pub name: String,
    /// Role label such as `admin`.
    #[serde(default)]
    pub role: String,
}

impl AdminUser {
    /// Name to show in greetings, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.email.as_str()
        } else {
            self.name.as_str()
        }
    }
}

/// Editable profile fields. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// Full display name.
    pub full_name: Option<String>,
    /// Contact phone number.
    pub mobile_number: Option<String>,
    /// Free-form gender label.
    pub gender: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Postal code.
    pub pincode: Option<String>,
    /// Replacement avatar.
    pub profile_image: Option<ImageUpload>,
}

impl ProfileUpdate {
    /// Whether the update would send nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
