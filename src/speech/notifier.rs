//! Fire-and-forget spoken announcements.
//!
//! [`SpeechNotifier::announce`] hands each utterance to tokio's blocking pool
//! and returns immediately.  Workers are never joined: the runtime may be
//! dropped at exit with speech still in flight, and concurrent announcements
//! may overlap.  Engine failures are logged at `debug` and otherwise ignored.

use std::sync::Arc;

use tokio::runtime::Handle;

use super::SpeechEngine;

// ---------------------------------------------------------------------------
// Announcer trait
// ---------------------------------------------------------------------------

/// Anything that can speak a confirmation without blocking the caller.
///
/// The navigation and form controllers depend on this seam rather than on
/// [`SpeechNotifier`] so they can be tested with a recording double.
pub trait Announcer: Send + Sync {
    /// Speak `text` if `enabled` and `text` is non-empty.
    fn announce(&self, text: &str, enabled: bool);

    /// Speak `text` regardless of the voice setting.
    fn announce_always(&self, text: &str) {
        self.announce(text, true);
    }
}

// ---------------------------------------------------------------------------
// SpeechNotifier
// ---------------------------------------------------------------------------

/// Runs a [`SpeechEngine`] on tokio's blocking pool, one job per call.
#[derive(Clone)]
pub struct SpeechNotifier {
    engine: Arc<dyn SpeechEngine>,
    runtime: Handle,
}

impl SpeechNotifier {
    /// Create a notifier that schedules work on `runtime`.
    pub fn new(engine: Arc<dyn SpeechEngine>, runtime: Handle) -> Self {
        Self { engine, runtime }
    }

    fn spawn_speech(&self, text: String) {
        let engine = Arc::clone(&self.engine);
        // The JoinHandle is dropped on purpose: nothing waits for speech.
        drop(self.runtime.spawn_blocking(move || {
            let result = engine.say(&text).and_then(|()| engine.run_and_wait());
            if let Err(e) = result {
                log::debug!("Speech failed for {text:?}: {e}");
            }
        }));
    }
}

impl Announcer for SpeechNotifier {
    fn announce(&self, text: &str, enabled: bool) {
        if !enabled || text.is_empty() {
            return;
        }
        log::debug!("Announcing: {text}");
        self.spawn_speech(text.to_owned());
    }
}

impl std::fmt::Debug for SpeechNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechNotifier").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// RecordingAnnouncer  (test-only)
// ---------------------------------------------------------------------------

/// Test double that records each call instead of speaking.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    calls: std::sync::Mutex<Vec<(String, bool)>>,
}

#[cfg(test)]
impl RecordingAnnouncer {
    /// Every `(text, enabled)` pair received, in call order.
    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().expect("lock").clone()
    }

    /// Texts that would actually have been spoken.
    pub fn spoken(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(text, enabled)| *enabled && !text.is_empty())
            .map(|(text, _)| text)
            .collect()
    }
}

#[cfg(test)]
impl Announcer for RecordingAnnouncer {
    fn announce(&self, text: &str, enabled: bool) {
        self.calls
            .lock()
            .expect("lock")
            .push((text.to_owned(), enabled));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
