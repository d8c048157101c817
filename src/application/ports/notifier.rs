/// Output-only boundary for the toast/notification surface. The messages are
/// implementation constants, never part of the conversation transcript.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}
