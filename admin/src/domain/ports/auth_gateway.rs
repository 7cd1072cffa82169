//! Driven port for the authentication endpoints.
//!
//! The session store authenticates, validates stored tokens and edits the
//! admin profile through this port, so its tests substitute a mock instead of
//! a server.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{AdminUser, ApiError, Envelope, LoginCredentials, ProfileUpdate};

/// `data` of a login response. Either field may be missing on a malformed
/// reply; the session store treats that as a failed login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    /// Issued bearer token.
    #[serde(default)]
    pub token: Option<String>,
    /// Signed-in admin.
    #[serde(default)]
    pub user: Option<AdminUser>,
}

/// `data` of a profile response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfilePayload {
    /// Current admin profile.
    #[serde(default)]
    pub user: Option<AdminUser>,
}

/// Authentication and profile collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token and user.
    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Envelope<LoginPayload>, ApiError>;

    /// Validate the stored token by loading the admin profile.
    ///
    /// Fails with [`crate::domain::ApiErrorCode::Unauthorized`] when the
    /// token was rejected.
    async fn fetch_profile(&self) -> Result<AdminUser, ApiError>;

    /// Update editable profile fields.
    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<Envelope<ProfilePayload>, ApiError>;
}
