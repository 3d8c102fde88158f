//! Persisted user settings and their JSON store.
//!
//! The document on disk has exactly two keys:
//!
//! ```json
//! {"theme": "teal", "voice": false}
//! ```
//!
//! Persistence is best-effort.  [`SettingsStore::load`] never fails (it falls
//! back to [`Settings::default`]) and [`SettingsStore::save`] only logs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::theme::ThemeKey;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The settings singleton: selected theme preset and voice feedback flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Active colour preset.
    pub theme: ThemeKey,
    /// Whether spoken announcements are enabled.
    pub voice: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeKey::default(),
            voice: true,
        }
    }
}

/// On-disk shape accepted by the loader.  Missing keys fall back to their
/// defaults and an unknown theme string resolves to the first preset.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    voice: Option<bool>,
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        let defaults = Settings::default();
        Self {
            theme: raw
                .theme
                .as_deref()
                .map(ThemeKey::resolve)
                .unwrap_or(defaults.theme),
            voice: raw.voice.unwrap_or(defaults.voice),
        }
    }
}

impl Settings {
    /// Load from an explicit path.
    ///
    /// Returns `Ok(Settings::default())` when the file does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let raw: RawSettings = serde_json::from_str(&content)?;
        Ok(raw.into())
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SettingsStore
// ---------------------------------------------------------------------------

/// Best-effort settings persistence bound to one file path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by the platform settings file from [`AppPaths`].
    pub fn from_paths(paths: &AppPaths) -> Self {
        Self::new(paths.settings_file.clone())
    }

    /// Store backed by an explicit file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted settings, or the defaults on any failure.
    pub fn load(&self) -> Settings {
        Settings::load_from(&self.path).unwrap_or_else(|e| {
            log::warn!(
                "Failed to load settings from {} ({e}); using defaults",
                self.path.display()
            );
            Settings::default()
        })
    }

    /// Persist `settings`.  Failures are logged and otherwise ignored.
    pub fn save(&self, settings: &Settings) {
        match settings.save_to(&self.path) {
            Ok(()) => log::debug!("Settings saved to {}", self.path.display()),
            Err(e) => log::warn!("Failed to save settings to {}: {e}", self.path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
