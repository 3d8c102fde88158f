//! Hover-triggered announcements with per-control debouncing.
//!
//! When the pointer sweeps across a row of buttons each one would otherwise
//! queue its label.  [`HoverDebouncer::schedule`] instead starts a short timer
//! keyed by the control; hovering the same control again restarts it, and
//! [`HoverDebouncer::cancel`] (pointer left) drops it.  Only timers that run
//! to completion reach the [`Announcer`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::Announcer;

/// Delay between hover and speech.
pub const HOVER_DELAY: Duration = Duration::from_millis(300);

/// Pending hover announcements, at most one per control.
pub struct HoverDebouncer {
    announcer: Arc<dyn Announcer>,
    runtime: Handle,
    delay: Duration,
    pending: HashMap<String, JoinHandle<()>>,
}

impl HoverDebouncer {
    /// Debouncer using the standard [`HOVER_DELAY`].
    pub fn new(announcer: Arc<dyn Announcer>, runtime: Handle) -> Self {
        Self::with_delay(announcer, runtime, HOVER_DELAY)
    }

    /// Debouncer with a custom delay.
    pub fn with_delay(announcer: Arc<dyn Announcer>, runtime: Handle, delay: Duration) -> Self {
        Self {
            announcer,
            runtime,
            delay,
            pending: HashMap::new(),
        }
    }

    /// Speak `text` for `control` after the delay, replacing any announcement
    /// still pending for the same control.
    pub fn schedule(&mut self, control: &str, text: &str, enabled: bool) {
        self.cancel(control);
        self.pending.retain(|_, task| !task.is_finished());
        if !enabled || text.is_empty() {
            return;
        }

        let announcer = Arc::clone(&self.announcer);
        let delay = self.delay;
        let text = text.to_owned();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            announcer.announce(&text, true);
        });
        self.pending.insert(control.to_owned(), task);
    }

    /// Drop the pending announcement for `control`, if any.
    pub fn cancel(&mut self, control: &str) {
        if let Some(task) = self.pending.remove(control) {
            task.abort();
        }
    }

    /// Drop every pending announcement (the controls are being torn down).
    pub fn cancel_all(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }

    /// Number of controls with a timer still running.
    pub fn pending_count(&self) -> usize {
        self.pending.values().filter(|t| !t.is_finished()).count()
    }
}

impl Drop for HoverDebouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
