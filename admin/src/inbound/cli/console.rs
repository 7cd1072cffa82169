//! Notifier that prints inline feedback on stderr.

use std::io::{self, Write};

use tracing::debug;

use crate::domain::ports::Notifier;

/// Writes success and failure notices to stderr, keeping stdout for
/// command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn emit(prefix: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if let Err(error) = writeln!(stderr, "{prefix}: {message}") {
            debug!(error = %error, "could not write notice");
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        Self::emit("ok", message);
    }

    fn error(&self, message: &str) {
        Self::emit("error", message);
    }
}
