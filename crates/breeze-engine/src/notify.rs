//! Default notifier writing settlement signals to the log.

use breeze_core::traits::notify::Notifier;

/// [`Notifier`] that forwards every signal to `tracing`. Used by
/// headless hosts and anywhere no richer notification surface exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn loading_started(&self, message: &str) {
        tracing::info!(target: "breeze::notify", "{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!(target: "breeze::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "breeze::notify", "{message}");
    }
}
