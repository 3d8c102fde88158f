//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\Memora\
//!   macOS:   ~/Library/Application Support/Memora/
//!   Linux:   ~/.config/Memora/
//!
//! If that directory cannot be created the settings file lives next to the
//! executable instead.
//!
//! Data dir (category CSV files): the working directory, or
//! `$MEMORA_DATA_DIR` when set.

use std::path::{Path, PathBuf};

/// Environment variable that relocates the category CSV files.
pub const DATA_DIR_ENV: &str = "MEMORA_DATA_DIR";

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory holding `memora_settings.json`.
    pub config_dir: PathBuf,
    /// Full path to `memora_settings.json`.
    pub settings_file: PathBuf,
    /// Directory holding one CSV file per category.
    pub data_dir: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "Memora";
    const SETTINGS_FILE: &'static str = "memora_settings.json";

    /// Resolves all paths, creating the config directory if needed.
    pub fn new() -> Self {
        let preferred = dirs::config_dir().map(|dir| dir.join(Self::APP_NAME));
        let config_dir = match preferred {
            Some(dir) => match std::fs::create_dir_all(&dir) {
                Ok(()) => dir,
                Err(e) => {
                    log::warn!(
                        "Cannot create config dir {} ({e}); using install dir",
                        dir.display()
                    );
                    install_dir()
                }
            },
            None => install_dir(),
        };

        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::with_dirs(config_dir, data_dir)
    }

    /// Build paths rooted at explicit directories (useful for tests).
    pub fn with_dirs(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let settings_file = config_dir.join(Self::SETTINGS_FILE);
        Self {
            config_dir,
            settings_file,
            data_dir: data_dir.into(),
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory containing the running executable, or `.` when unknown.
fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.config_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths.data_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "memora_settings.json"));
    }

    #[test]
    fn with_dirs_places_settings_in_config_dir() {
        let paths = AppPaths::with_dirs("/tmp/cfg", "/tmp/data");
        assert_eq!(paths.settings_file, PathBuf::from("/tmp/cfg/memora_settings.json"));
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/data"));
    }
}
