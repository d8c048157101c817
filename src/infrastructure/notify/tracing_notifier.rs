use crate::application::ports::Notifier;

/// Stand-in for the UI toast subsystem: surfaces notifications as structured
/// log events.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(toast = message, "notify success");
    }

    fn notify_failure(&self, message: &str) {
        tracing::warn!(toast = message, "notify failure");
    }
}
