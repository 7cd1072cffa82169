//! Port for transient, inline feedback.

use std::sync::{Mutex, PoisonError};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// An action succeeded.
    Success,
    /// An action failed.
    Error,
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Text shown to the operator.
    pub message: String,
}

/// Short-lived success and failure messages shown next to the action that
/// caused them.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Report a successful action.
    fn success(&self, message: &str);

    /// Report a failed action.
    fn error(&self, message: &str);
}

/// Notifier that keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, kind: NoticeKind, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice {
                kind,
                message: message.to_owned(),
            });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeKind::Error, message);
    }
}
