//! Speech engine trait and the host-command backend.
//!
//! The engine is an opaque collaborator with two calls: [`SpeechEngine::say`]
//! queues an utterance and [`SpeechEngine::run_and_wait`] blocks until every
//! queued utterance has been spoken.  Both may block for seconds, so callers
//! must never invoke them on the UI thread (see
//! [`SpeechNotifier`](super::SpeechNotifier)).
//!
//! [`CommandSpeechEngine`] drives whatever speech command the host provides:
//!
//! | Platform | Command |
//! |----------|---------|
//! | macOS    | `say -r 165` |
//! | Windows  | PowerShell `System.Speech` |
//! | Linux    | `espeak-ng` / `espeak` (`-s 165`), else `spd-say` |
//!
//! [`SilentSpeechEngine`] is used when none is installed.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

use thiserror::Error;

/// Speaking rate in words per minute.
pub const SPEECH_RATE_WPM: u32 = 165;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Errors from the speech backend.  The notifier logs and drops them.
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    /// No speech backend is available on this host.
    #[error("no speech backend available")]
    Unavailable,

    /// The speech command could not be started.
    #[error("failed to launch speech command: {0}")]
    Launch(String),

    /// The speech command ran but reported failure.
    #[error("speech command failed: {0}")]
    Failed(String),
}

// ---------------------------------------------------------------------------
// SpeechEngine trait
// ---------------------------------------------------------------------------

/// A text-to-speech engine.
///
/// Implementors must be `Send + Sync` so they can be shared with worker
/// threads behind an `Arc<dyn SpeechEngine>`.
pub trait SpeechEngine: Send + Sync {
    /// Queue `text` for speaking.
    fn say(&self, text: &str) -> Result<(), SpeechError>;

    /// Speak everything queued so far, blocking until done.
    fn run_and_wait(&self) -> Result<(), SpeechError>;
}

// ---------------------------------------------------------------------------
// CommandSpeechEngine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    Say(PathBuf),
    PowerShell(PathBuf),
    Espeak(PathBuf),
    SpdSay(PathBuf),
}

impl Backend {
    /// Find the first speech command installed on this host.
    fn detect() -> Option<Self> {
        let names: &[&str] = if cfg!(target_os = "macos") {
            &["say"]
        } else if cfg!(windows) {
            &["powershell"]
        } else {
            &["espeak-ng", "espeak", "spd-say"]
        };

        names.iter().find_map(|name| {
            which::which(name)
                .ok()
                .map(|path| Self::from_program(name, path))
        })
    }

    fn from_program(name: &str, path: PathBuf) -> Self {
        match name {
            "say" => Backend::Say(path),
            "powershell" => Backend::PowerShell(path),
            "spd-say" => Backend::SpdSay(path),
            _ => Backend::Espeak(path),
        }
    }

    fn program(&self) -> &Path {
        match self {
            Backend::Say(p) | Backend::PowerShell(p) | Backend::Espeak(p) | Backend::SpdSay(p) => p,
        }
    }

    /// Build the command that speaks `text` and exits when done.
    fn command(&self, text: &str) -> Command {
        let mut cmd = Command::new(self.program());
        match self {
            Backend::Say(_) => {
                cmd.arg("-r").arg(SPEECH_RATE_WPM.to_string()).arg(text);
            }
            Backend::Espeak(_) => {
                cmd.arg("-s").arg(SPEECH_RATE_WPM.to_string()).arg(text);
            }
            Backend::SpdSay(_) => {
                cmd.arg("--wait").arg(text);
            }
            Backend::PowerShell(_) => {
                let script = format!(
                    "Add-Type -AssemblyName System.Speech; \
                     $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
                     $s.Speak('{}')",
                    text.replace('\'', "''")
                );
                cmd.arg("-NoProfile").arg("-Command").arg(script);
            }
        }
        cmd
    }
}

/// Speaks through the host's speech command, one process per utterance.
#[derive(Debug)]
pub struct CommandSpeechEngine {
    backend: Backend,
    queue: Mutex<Vec<String>>,
}

impl CommandSpeechEngine {
    /// Detect an installed speech command.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::Unavailable`] when the host has none.
    pub fn detect() -> Result<Self, SpeechError> {
        let backend = Backend::detect().ok_or(SpeechError::Unavailable)?;
        log::info!("Speech backend: {}", backend.program().display());
        Ok(Self {
            backend,
            queue: Mutex::new(Vec::new()),
        })
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn say(&self, text: &str) -> Result<(), SpeechError> {
        self.queue
            .lock()
            .map_err(|e| SpeechError::Failed(e.to_string()))?
            .push(text.to_owned());
        Ok(())
    }

    fn run_and_wait(&self) -> Result<(), SpeechError> {
        let pending = std::mem::take(
            &mut *self
                .queue
                .lock()
                .map_err(|e| SpeechError::Failed(e.to_string()))?,
        );

        for text in pending {
            let status = self
                .backend
                .command(&text)
                .status()
                .map_err(|e| SpeechError::Launch(e.to_string()))?;
            if !status.success() {
                return Err(SpeechError::Failed(status.to_string()));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SilentSpeechEngine
// ---------------------------------------------------------------------------

/// Fallback engine for hosts without a speech command.  Accepts and discards
/// everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeechEngine;

impl SpeechEngine for SilentSpeechEngine {
    fn say(&self, text: &str) -> Result<(), SpeechError> {
        log::trace!("(silent) {text}");
        Ok(())
    }

    fn run_and_wait(&self) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// The best engine available on this host.
pub fn default_engine() -> Box<dyn SpeechEngine> {
    match CommandSpeechEngine::detect() {
        Ok(engine) => Box::new(engine),
        Err(e) => {
            log::warn!("Speech disabled: {e}");
            Box::new(SilentSpeechEngine)
        }
    }
}

// ---------------------------------------------------------------------------
// MockSpeechEngine  (test-only)
// ---------------------------------------------------------------------------

/// Records every utterance instead of speaking it.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockSpeechEngine {
    queued: Mutex<Vec<String>>,
    spoken: Mutex<Vec<String>>,
    delay: std::time::Duration,
    fail: bool,
}

#[cfg(test)]
impl MockSpeechEngine {
    /// Engine whose `run_and_wait` blocks for `delay` before finishing.
    pub fn slow(delay: std::time::Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Engine whose `run_and_wait` always fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Utterances that finished speaking, in completion order.
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().expect("lock").clone()
    }
}

#[cfg(test)]
impl SpeechEngine for MockSpeechEngine {
    fn say(&self, text: &str) -> Result<(), SpeechError> {
        self.queued.lock().expect("lock").push(text.to_owned());
        Ok(())
    }

    fn run_and_wait(&self) -> Result<(), SpeechError> {
        std::thread::sleep(self.delay);
        if self.fail {
            return Err(SpeechError::Failed("mock failure".into()));
        }
        let drained = std::mem::take(&mut *self.queued.lock().expect("lock"));
        self.spoken.lock().expect("lock").extend(drained);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn espeak_command_sets_rate() {
        let backend = Backend::Espeak(PathBuf::from("/usr/bin/espeak"));
        let cmd = backend.command("Entry saved");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(cmd.get_program(), "/usr/bin/espeak");
        assert_eq!(args, ["-s", "165", "Entry saved"]);
    }

    #[test]
    fn powershell_command_escapes_quotes() {
        let backend = Backend::PowerShell(PathBuf::from("powershell"));
        let cmd = backend.command("Bob's list");
        let script = cmd.get_args().last().expect("script").to_string_lossy().into_owned();
        assert!(script.contains("$s.Speak('Bob''s list')"));
    }

    #[test]
    fn program_names_map_to_backends() {
        let path = PathBuf::from("/bin/x");
        assert_eq!(Backend::from_program("say", path.clone()), Backend::Say(path.clone()));
        assert_eq!(Backend::from_program("espeak-ng", path.clone()), Backend::Espeak(path.clone()));
        assert_eq!(Backend::from_program("spd-say", path.clone()), Backend::SpdSay(path));
    }

    #[test]
    fn silent_engine_accepts_everything() {
        let engine = SilentSpeechEngine;
        assert!(engine.say("hello").is_ok());
        assert!(engine.run_and_wait().is_ok());
    }

    #[test]
    fn mock_engine_speaks_queued_text_on_flush() {
        let engine = MockSpeechEngine::default();
        engine.say("one").unwrap();
        engine.say("two").unwrap();
        assert!(engine.spoken().is_empty());

        engine.run_and_wait().unwrap();
        assert_eq!(engine.spoken(), ["one", "two"]);
    }

    #[test]
    fn engine_is_object_safe() {
        let _: Box<dyn SpeechEngine> = Box::new(SilentSpeechEngine);
    }
}
