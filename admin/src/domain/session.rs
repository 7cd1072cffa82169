//! Authenticated session state.
//!
//! The store moves through `Uninitialized → Validating → {Authenticated,
//! Anonymous}`. A stored token is only trusted after the profile endpoint
//! accepts it; the user is never persisted, only the token.
//!
//! State lives behind a short synchronous lock that is never held across an
//! `.await`.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::domain::ports::{AuthGateway, ProfilePayload, TokenStore};
use crate::domain::{AdminUser, ApiError, BearerToken, Envelope, LoginCredentials, ProfileUpdate};

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Boot has not started.
    #[default]
    Uninitialized,
    /// A stored token is being checked against the profile endpoint.
    Validating,
    /// A validated user is signed in.
    Authenticated,
    /// Nobody is signed in.
    Anonymous,
}

/// Read model of the session.
///
/// `is_authenticated` is exactly `user.is_some()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Signed-in admin.
    pub user: Option<AdminUser>,
    /// Whether a user is signed in.
    pub is_authenticated: bool,
    /// Whether boot is still in progress.
    pub is_loading: bool,
    /// Lifecycle phase.
    pub phase: SessionPhase,
}

#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    user: Option<AdminUser>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            user: None,
            loading: true,
        }
    }
}

/// Process-wide session: the current admin and the token lifecycle.
pub struct SessionStore {
    tokens: Arc<dyn TokenStore>,
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Uninitialised session; call [`Self::boot`] next.
    pub fn new(tokens: Arc<dyn TokenStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            tokens,
            gateway,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Restore the session from the stored token.
    ///
    /// - no token: anonymous, no network call;
    /// - token accepted: authenticated;
    /// - token rejected with 401: token discarded, anonymous;
    /// - any other failure: token kept, anonymous for this run.
    pub async fn boot(&self) -> SessionSnapshot {
        let token = match self.tokens.load() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "could not read stored token; continuing signed out");
                None
            }
        };

        if token.is_none() {
            self.settle(SessionPhase::Anonymous, None);
            debug!("no stored token");
            return self.snapshot();
        }

        self.with_state(|state| state.phase = SessionPhase::Validating);
        match self.gateway.fetch_profile().await {
            Ok(user) => {
                info!(user = %user.email, "session restored");
                self.settle(SessionPhase::Authenticated, Some(user));
            }
            Err(err) if err.is_unauthorized() => {
                info!("stored token rejected; discarding it");
                if let Err(clear_err) = self.tokens.clear() {
                    warn!(error = %clear_err, "could not discard rejected token");
                }
                self.settle(SessionPhase::Anonymous, None);
            }
            Err(err) => {
                warn!(
                    code = ?err.code(),
                    status = ?err.status(),
                    error = %err,
                    "could not validate stored token; keeping it"
                );
                self.settle(SessionPhase::Anonymous, None);
            }
        }
        self.snapshot()
    }

    /// Sign in. Returns `true` only when the server issued both a token and
    /// a user and the token was stored; otherwise nothing changes.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let credentials = match LoginCredentials::try_from_parts(email, password) {
            Ok(credentials) => credentials,
            Err(err) => {
                debug!(error = %err, "login blocked by validation");
                return false;
            }
        };

        let envelope = match self.gateway.login(&credentials).await {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(code = ?err.code(), error = %err, "login request failed");
                return false;
            }
        };

        let Some(payload) = envelope.into_data() else {
            debug!("login response was not successful");
            return false;
        };
        let (Some(raw_token), Some(user)) = (payload.token, payload.user) else {
            warn!("login response lacked a token or user");
            return false;
        };
        let token = match BearerToken::new(raw_token) {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "login response carried an unusable token");
                return false;
            }
        };
        if let Err(err) = self.tokens.save(&token) {
            warn!(error = %err, "could not store token");
            return false;
        }

        info!(user = %user.email, "signed in");
        self.settle(SessionPhase::Authenticated, Some(user));
        true
    }

    /// Sign out: clear the stored token and the user. No network call.
    pub fn logout(&self) {
        if let Err(err) = self.tokens.clear() {
            warn!(error = %err, "could not clear stored token");
        }
        self.settle(SessionPhase::Anonymous, None);
        info!("signed out");
    }

    /// Current read model.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        SessionSnapshot {
            user: state.user.clone(),
            is_authenticated: state.user.is_some(),
            is_loading: state.loading,
            phase: state.phase,
        }
    }

    /// Signed-in admin, if any.
    pub fn current_user(&self) -> Option<AdminUser> {
        self.snapshot().user
    }

    /// Reload the signed-in admin from the profile endpoint.
    ///
    /// A 401 signs the session out and discards the token, like boot does.
    pub async fn refresh_profile(&self) -> Result<AdminUser, ApiError> {
        match self.gateway.fetch_profile().await {
            Ok(user) => {
                self.settle(SessionPhase::Authenticated, Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                if err.is_unauthorized() {
                    info!("token rejected during refresh; signing out");
                    self.logout();
                }
                Err(err)
            }
        }
    }

    /// Send a profile update. A successful reply carrying the user replaces
    /// the signed-in user; the envelope is returned as received.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<Envelope<ProfilePayload>, ApiError> {
        let envelope = self.gateway.update_profile(update).await?;
        let updated = envelope
            .success
            .then(|| envelope.data.as_ref().and_then(|payload| payload.user.clone()))
            .flatten();
        if let Some(user) = updated {
            self.with_state(|state| {
                if state.user.is_some() {
                    state.user = Some(user);
                }
            });
        }
        Ok(envelope)
    }

    fn settle(&self, phase: SessionPhase, user: Option<AdminUser>) {
        self.with_state(|state| {
            state.phase = phase;
            state.user = user;
            state.loading = false;
        });
    }

    fn with_state(&self, change: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        change(&mut state);
    }
}
