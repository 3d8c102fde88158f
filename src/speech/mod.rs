//! Spoken feedback for Memora.
//!
//! # Architecture
//!
//! ```text
//!  UI thread                       tokio runtime
//!  ─────────                       ─────────────
//!  Announcer::announce ──────────▶ spawn_blocking ──▶ SpeechEngine::say
//!                                                     SpeechEngine::run_and_wait
//!  HoverDebouncer::schedule ─────▶ spawn(sleep 300 ms) ──▶ Announcer::announce
//!  HoverDebouncer::cancel   ─────▶ JoinHandle::abort
//! ```
//!
//! Nothing on the UI thread ever waits for speech.

pub mod debounce;
pub mod engine;
pub mod notifier;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use debounce::{HoverDebouncer, HOVER_DELAY};
pub use engine::{
    default_engine, CommandSpeechEngine, SilentSpeechEngine, SpeechEngine, SpeechError,
    SPEECH_RATE_WPM,
};
pub use notifier::{Announcer, SpeechNotifier};

// test-only re-exports so other modules' tests can reach the doubles.
#[cfg(test)]
pub use engine::MockSpeechEngine;
#[cfg(test)]
pub use notifier::RecordingAnnouncer;
