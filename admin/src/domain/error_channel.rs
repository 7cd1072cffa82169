//! Process-wide error broadcast.
//!
//! The HTTP adapter lives outside any view, yet its failures must reach the
//! operator-facing error state. [`ErrorBroadcast`] is the indirection: a
//! single slot that the composition root arms with an [`ErrorSink`] once the
//! error state exists. Until then failures are dropped from the channel (the
//! caller still receives its `Err`).

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tokio::sync::watch;
use tracing::debug;

/// Receiver of broadcast error messages.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink: Send + Sync {
    /// Replace the current error message.
    fn set_error(&self, message: &str);

    /// Clear the current error message.
    fn clear_error(&self);
}

/// Cloneable handle to a broadcast slot.
///
/// Clones share the slot, so arming one handle arms them all.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use saree_admin::domain::{ErrorBroadcast, ErrorState};
///
/// let channel = ErrorBroadcast::new();
/// assert!(!channel.broadcast("dropped"));
///
/// let state = Arc::new(ErrorState::new());
/// channel.arm(state.clone());
/// assert!(channel.broadcast("Catalog not found"));
/// assert_eq!(state.current().message.as_deref(), Some("Catalog not found"));
/// ```
#[derive(Clone, Default)]
pub struct ErrorBroadcast {
    slot: Arc<RwLock<Option<Arc<dyn ErrorSink>>>>,
}

impl ErrorBroadcast {
    /// Fresh, unarmed channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide channel.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<ErrorBroadcast> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Route future broadcasts to `sink`, replacing any previous sink.
    pub fn arm(&self, sink: Arc<dyn ErrorSink>) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(sink);
    }

    /// Stop routing broadcasts.
    pub fn disarm(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether a sink is installed.
    pub fn is_armed(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Push `message` to the armed sink. Returns `false` when unarmed.
    pub fn broadcast(&self, message: &str) -> bool {
        let Some(sink) = self.sink() else {
            debug!(message, "error broadcast dropped; channel unarmed");
            return false;
        };
        sink.set_error(message);
        true
    }

    /// Clear the armed sink's message, if any.
    pub fn clear(&self) {
        if let Some(sink) = self.sink() {
            sink.clear_error();
        }
    }

    fn sink(&self) -> Option<Arc<dyn ErrorSink>> {
        // Clone out of the lock so sinks never run while it is held.
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for ErrorBroadcast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorBroadcast")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// The latest broadcast error, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSignal {
    /// Message to show, `None` once cleared.
    pub message: Option<String>,
}

/// Operator-facing error state, observable through a watch channel.
#[derive(Debug)]
pub struct ErrorState {
    sender: watch::Sender<ErrorSignal>,
}

impl ErrorState {
    /// Empty error state.
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(ErrorSignal::default());
        Self { sender }
    }

    /// Snapshot of the current signal.
    pub fn current(&self) -> ErrorSignal {
        self.sender.borrow().clone()
    }

    /// Observe future changes.
    pub fn subscribe(&self) -> watch::Receiver<ErrorSignal> {
        self.sender.subscribe()
    }
}

impl Default for ErrorState {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSink for ErrorState {
    fn set_error(&self, message: &str) {
        self.sender.send_replace(ErrorSignal {
            message: Some(message.to_owned()),
        });
    }

    fn clear_error(&self) {
        self.sender.send_replace(ErrorSignal::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn unarmed_channel_drops_messages() {
        let channel = ErrorBroadcast::new();
        assert!(!channel.is_armed());
        assert!(!channel.broadcast("lost"));
    }

    #[test]
    fn armed_channel_forwards_exactly_once() {
        let mut sink = MockErrorSink::new();
        sink.expect_set_error()
            .with(eq("Saree not found"))
            .times(1)
            .return_const(());
        let channel = ErrorBroadcast::new();
        channel.arm(Arc::new(sink));

        assert!(channel.broadcast("Saree not found"));
    }

    #[test]
    fn clones_share_the_slot() {
        let channel = ErrorBroadcast::new();
        let handle = channel.clone();
        let state = Arc::new(ErrorState::new());
        handle.arm(state.clone());

        channel.broadcast("boom");
        assert_eq!(state.current().message.as_deref(), Some("boom"));

        channel.disarm();
        assert!(!handle.is_armed());
    }

    #[test]
    fn clear_resets_the_state() {
        let channel = ErrorBroadcast::new();
        let state = Arc::new(ErrorState::new());
        channel.arm(state.clone());
        channel.broadcast("boom");

        channel.clear();
        assert_eq!(state.current(), ErrorSignal::default());
    }

    #[tokio::test]
    async fn subscribers_observe_updates() {
        let state = ErrorState::new();
        let mut receiver = state.subscribe();

        state.set_error("first");
        receiver.changed().await.expect("sender alive");
        assert_eq!(receiver.borrow().message.as_deref(), Some("first"));
    }
}
