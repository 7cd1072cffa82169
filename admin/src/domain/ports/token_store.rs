//! Port for the durable bearer-token slot.
//!
//! Exactly one value is persisted across runs: the token issued at login. The
//! HTTP client reads it before every request and the session store writes or
//! clears it on login, logout and failed validation.

use std::sync::{Mutex, PoisonError};

use crate::domain::BearerToken;

use super::define_port_error;

define_port_error! {
    /// Errors raised by token storage adapters.
    pub enum TokenStoreError {
        /// Stored token could not be read.
        Read => "token store read failed",
        /// Token could not be written or removed.
        Write => "token store write failed",
        /// Stored content is not a usable token.
        Corrupt => "stored token is unusable",
    }
}

/// Durable storage for the bearer token.
///
/// Calls are synchronous and short; adapters must not block on the network.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, `None` when nothing is stored.
    fn load(&self) -> Result<Option<BearerToken>, TokenStoreError>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &BearerToken) -> Result<(), TokenStoreError>;

    /// Remove the stored token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Process-local token store for tests and embedders without a disk.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<BearerToken>>,
}

impl InMemoryTokenStore {
    /// Store seeded with `token`.
    pub fn with_token(token: BearerToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<BearerToken>, TokenStoreError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &BearerToken) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn in_memory_store_round_trips_and_clears() {
        let store = InMemoryTokenStore::default();
        assert!(store.load().expect("load").is_none());

        let token = BearerToken::new("abc.def").expect("token");
        store.save(&token).expect("save");
        assert_eq!(store.load().expect("load"), Some(token));

        store.clear().expect("clear");
        store.clear().expect("clearing twice is fine");
        assert!(store.load().expect("load").is_none());
    }
}
