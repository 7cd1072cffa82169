//! Store-wide contact and branding settings.

use serde::{Deserialize, Serialize};

/// Settings shown in the storefront header and footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    /// Shop name.
    #[serde(default)]
    pub store_name: String,
    /// Strapline under the name.
    #[serde(default)]
    pub tagline: String,
    /// Public contact email.
    #[serde(default)]
    pub email: String,
    /// Public phone numbers.
    #[serde(default)]
    pub phone: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// WhatsApp number in international format without `+`.
    #[serde(default)]
    pub whatsapp: String,
}
