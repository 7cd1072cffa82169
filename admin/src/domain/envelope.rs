//! The `{ success, data, message }` wrapper every admin endpoint returns.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server response wrapper.
///
/// ## Invariants
/// - `success` defaults to `false` when the field is missing.
/// - `data` is passed through untouched; list payloads decode into
///   [`pagination::Page`].
///
/// # Examples
/// ```
/// use saree_admin::domain::Envelope;
///
/// let envelope: Envelope<u32> =
///     serde_json::from_str(r#"{ "success": true, "data": 7, "message": "Saved" }"#)
///         .expect("decodes");
/// assert_eq!(envelope.message(), Some("Saved"));
/// assert_eq!(envelope.into_data(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Payload, when the endpoint returns one.
    pub data: Option<T>,
    /// Human-readable outcome text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope whose payload is not interpreted, e.g. delete acknowledgements.
pub type Acknowledgement = Envelope<Value>;

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Envelope the server flagged as unsuccessful.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Attach an outcome message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Outcome text, ignoring blank messages.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }

    /// Payload of a successful envelope.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    /// Transform the payload, keeping the flags.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
        }
    }
}
