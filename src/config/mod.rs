//! Configuration module for Memora.
//!
//! Provides [`AppPaths`] for cross-platform settings/data locations and the
//! JSON-backed [`Settings`] singleton with its best-effort [`SettingsStore`].

pub mod paths;
pub mod settings;

pub use paths::{AppPaths, DATA_DIR_ENV};
pub use settings::{Settings, SettingsStore};
