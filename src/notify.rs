//! Boundary capabilities consumed by the sync gateway.
//!
//! Notification display and destructive-action confirmation are owned by the
//! embedding application. The gateway only depends on these traits, so tests
//! substitute deterministic stubs.

/// Outcome kind of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

/// Receives user-facing notifications from the gateway.
pub trait NotificationSink {
    fn notify(&self, notice: Notice, message: &str);
}

/// Synchronous, blocking confirmation for destructive actions.
///
/// Returns true when the user confirms. The calling thread services nothing
/// else while the prompt is pending.
pub trait ConfirmDestructive {
    fn confirm(&self, message: &str) -> bool;
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notice: Notice, message: &str) {
        (**self).notify(notice, message);
    }
}

impl<T: ConfirmDestructive + ?Sized> ConfirmDestructive for &T {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Notification sink backed by tracing events.
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, notice: Notice, message: &str) {
        match notice {
            Notice::Success => tracing::info!(target: "seqsync::notify", "{message}"),
            Notice::Error => tracing::warn!(target: "seqsync::notify", "{message}"),
        }
    }
}
