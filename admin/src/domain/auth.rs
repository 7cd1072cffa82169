//! Authentication primitives: login credentials and the bearer token.
//!
//! Both types validate their input on construction so the session store and
//! the token store never handle blank values.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

/// Domain error returned when login input is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated admin login credentials.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` must be non-empty but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use saree_admin::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin@shop.test ", "secret").unwrap();
/// assert_eq!(creds.email(), "admin@shop.test");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email identifying the admin account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validation errors returned by [`BearerToken::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenValidationError {
    /// Token was blank once trimmed.
    #[error("bearer token must not be empty")]
    Empty,
    /// Token contains whitespace after trimming.
    #[error("bearer token must not contain whitespace")]
    ContainsWhitespace,
}

/// Opaque bearer token issued by the login endpoint.
///
/// The raw value is zeroed on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Validate and wrap a token. Surrounding whitespace is trimmed.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TokenValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TokenValidationError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(TokenValidationError::ContainsWhitespace);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Raw token for persistence and header construction.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Value for the `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}
