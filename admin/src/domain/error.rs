//! Failures surfaced by the admin API.
//!
//! These errors are transport agnostic. The HTTP adapter maps status codes
//! and client failures onto [`ApiErrorCode`]; the session store and the views
//! only inspect the code and the user-facing message.

use std::fmt;

/// Message broadcast when a failure carries no server-provided explanation.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// The server rejected the request (4xx other than 401, 403 and 404).
    InvalidRequest,
    /// The bearer token is missing or provably invalid (HTTP 401).
    Unauthorized,
    /// Authenticated but not permitted (HTTP 403).
    Forbidden,
    /// The addressed record does not exist (HTTP 404).
    NotFound,
    /// The server failed while handling the request (5xx).
    Server,
    /// No response was received.
    Transport,
    /// The request timed out before a response arrived.
    Timeout,
    /// A response arrived but its body could not be decoded.
    Decode,
}

impl ApiErrorCode {
    /// Category for a non-success HTTP status.
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            400..=499 => Self::InvalidRequest,
            _ => Self::Server,
        }
    }
}

/// A failed admin API call.
///
/// ## Invariants
/// - `message` is a non-empty diagnostic for logs.
/// - `server_message`, when present, is the `message` field of the error
///   body exactly as the backend sent it.
///
/// # Examples
/// ```
/// use saree_admin::domain::{ApiError, ApiErrorCode, GENERIC_ERROR_MESSAGE};
///
/// let err = ApiError::from_status(401, Some("Token expired".to_owned()));
/// assert!(err.is_unauthorized());
/// assert_eq!(err.user_message(), "Token expired");
///
/// let err = ApiError::transport("connection refused");
/// assert_eq!(err.code(), ApiErrorCode::Transport);
/// assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: ApiErrorCode,
    message: String,
    status: Option<u16>,
    server_message: Option<String>,
}

impl ApiError {
    /// Create an error without an HTTP status.
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            status: None,
            server_message: None,
        }
    }

    /// Error for a non-success HTTP status and its optional body message.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        Self {
            code: ApiErrorCode::from_status(status),
            message: format!("request failed with status code {status}"),
            status: Some(status),
            server_message,
        }
    }

    /// Convenience constructor for [`ApiErrorCode::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Transport, message)
    }

    /// Convenience constructor for [`ApiErrorCode::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Timeout, message)
    }

    /// Convenience constructor for [`ApiErrorCode::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Decode, message)
    }

    /// Convenience constructor for [`ApiErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::InvalidRequest, message)
    }

    /// Stable machine-readable error code.
    pub const fn code(&self) -> ApiErrorCode {
        self.code
    }

    /// Diagnostic message suitable for logs.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// HTTP status, when a response was received.
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Message field of the error body, when the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    /// Whether the server provably rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.code == ApiErrorCode::Unauthorized
    }

    /// Text shown to the operator: the server message, else the generic
    /// fallback.
    pub fn user_message(&self) -> &str {
        self.server_message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.server_message() {
            Some(server) if !server.trim().is_empty() => write!(f, "{}: {server}", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}
