//! Transient failure messages.
//!
//! Shows a message through the view port and dismisses it after a
//! fixed delay. Independent of all other controller state. A newer
//! `show` replaces the visible message and aborts the previous
//! dismissal task, so at most one dismissal is ever pending.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::view::ScanView;

/// How long a message stays visible before auto-dismissal.
pub const DEFAULT_DISPLAY_TTL: Duration = Duration::from_secs(5);

pub struct ErrorNotifier {
    view: Arc<dyn ScanView>,
    ttl: Duration,
    dismissal: Mutex<Option<JoinHandle<()>>>,
}

impl ErrorNotifier {
    pub fn new(view: Arc<dyn ScanView>) -> Self {
        Self::with_ttl(view, DEFAULT_DISPLAY_TTL)
    }

    pub fn with_ttl(view: Arc<dyn ScanView>, ttl: Duration) -> Self {
        Self {
            view,
            ttl,
            dismissal: Mutex::new(None),
        }
    }

    /// Display `message` and schedule its dismissal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: &str) {
        warn!(message = %message, "Failure reported to operator");
        self.view.show_error(message);

        let mut slot = self.dismissal.lock().unwrap();
        if let Some(previous) = slot.take() {
            previous.abort();
        }

        let view = Arc::clone(&self.view);
        let ttl = self.ttl;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            view.hide_error();
        }));
    }

    /// Dismiss immediately and cancel any pending dismissal.
    pub fn hide(&self) {
        if let Some(pending) = self.dismissal.lock().unwrap().take() {
            pending.abort();
        }
        self.view.hide_error();
    }
}
