//! User-facing error reporting.

use tracing::error;

/// Displays an error message to the user.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Reports messages through the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        error!(target: "homewatt::notify", "{}", message);
    }
}
