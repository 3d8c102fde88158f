//! Colour presets and their mapping onto egui visuals.
//!
//! | Key      | Primary   | Background |
//! |----------|-----------|------------|
//! | `violet` | `#7C4DFF` | `#F0F7FF`  |
//! | `teal`   | `#00BFA5` | `#F5FFFB`  |
//! | `sunset` | `#FF7043` | `#FFF8F0`  |
//! | `forest` | `#2E7D32` | `#F5FFF6`  |
//!
//! Themes are cosmetic only; nothing in the data path depends on them.

use eframe::egui::{self, Color32};
use serde::Serialize;

// ---------------------------------------------------------------------------
// ThemeKey
// ---------------------------------------------------------------------------

/// Identifier of one of the four built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    /// Rich purple on soft sky blue.  The first preset and the fallback.
    #[default]
    Violet,
    Teal,
    Sunset,
    Forest,
}

impl ThemeKey {
    /// All presets in display order.
    pub const ALL: [ThemeKey; 4] = [
        ThemeKey::Violet,
        ThemeKey::Teal,
        ThemeKey::Sunset,
        ThemeKey::Forest,
    ];

    /// Identifier persisted in the settings file.
    pub fn key(self) -> &'static str {
        match self {
            ThemeKey::Violet => "violet",
            ThemeKey::Teal => "teal",
            ThemeKey::Sunset => "sunset",
            ThemeKey::Forest => "forest",
        }
    }

    /// Human-readable name shown on picker buttons.
    pub fn label(self) -> &'static str {
        match self {
            ThemeKey::Violet => "Violet",
            ThemeKey::Teal => "Teal",
            ThemeKey::Sunset => "Sunset",
            ThemeKey::Forest => "Forest",
        }
    }

    /// Parse a persisted identifier.  Returns `None` for unknown keys.
    ///
    /// ```
    /// use memora::theme::ThemeKey;
    ///
    /// assert_eq!(ThemeKey::from_key("teal"), Some(ThemeKey::Teal));
    /// assert_eq!(ThemeKey::from_key("neon"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Parse a persisted identifier, falling back to the first preset.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    /// Colour palette for this preset.
    pub fn palette(self) -> Palette {
        match self {
            ThemeKey::Violet => Palette {
                primary: Color32::from_rgb(0x7C, 0x4D, 0xFF),
                secondary: Color32::from_rgb(0x00, 0xBF, 0xA5),
                bg: Color32::from_rgb(0xF0, 0xF7, 0xFF),
                card: Color32::WHITE,
                text: Color32::from_rgb(0x2C, 0x3E, 0x50),
                accent: Color32::from_rgb(0xFF, 0x6B, 0x6B),
                hover: Color32::from_rgb(0x6B, 0x42, 0xE8),
            },
            ThemeKey::Teal => Palette {
                primary: Color32::from_rgb(0x00, 0xBF, 0xA5),
                secondary: Color32::from_rgb(0x7C, 0x4D, 0xFF),
                bg: Color32::from_rgb(0xF5, 0xFF, 0xFB),
                card: Color32::WHITE,
                text: Color32::from_rgb(0x10, 0x30, 0x2B),
                accent: Color32::from_rgb(0xFF, 0xD1, 0x66),
                hover: Color32::from_rgb(0x00, 0x96, 0x88),
            },
            ThemeKey::Sunset => Palette {
                primary: Color32::from_rgb(0xFF, 0x70, 0x43),
                secondary: Color32::from_rgb(0xFF, 0xD5, 0x4F),
                bg: Color32::from_rgb(0xFF, 0xF8, 0xF0),
                card: Color32::WHITE,
                text: Color32::from_rgb(0x4E, 0x34, 0x2E),
                accent: Color32::from_rgb(0xFF, 0x6B, 0x6B),
                hover: Color32::from_rgb(0xFF, 0x57, 0x22),
            },
            ThemeKey::Forest => Palette {
                primary: Color32::from_rgb(0x2E, 0x7D, 0x32),
                secondary: Color32::from_rgb(0xA5, 0xD6, 0xA7),
                bg: Color32::from_rgb(0xF5, 0xFF, 0xF6),
                card: Color32::WHITE,
                text: Color32::from_rgb(0x1B, 0x5E, 0x20),
                accent: Color32::from_rgb(0x4C, 0xAF, 0x50),
                hover: Color32::from_rgb(0x1B, 0x5E, 0x20),
            },
        }
    }
}

impl std::fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Display colours of one preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Primary buttons and headings.
    pub primary: Color32,
    /// Secondary buttons (back, view, search).
    pub secondary: Color32,
    /// Window background.
    pub bg: Color32,
    /// Card and dialog background.
    pub card: Color32,
    /// Body text.
    pub text: Color32,
    /// Warnings and highlights.
    pub accent: Color32,
    /// Button fill while hovered or pressed.
    pub hover: Color32,
}

impl Palette {
    /// Replace the context's visuals with ones derived from this palette.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.bg;
        visuals.window_fill = self.card;
        visuals.extreme_bg_color = self.card;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.primary;
        visuals.widgets.hovered.weak_bg_fill = self.hover;
        visuals.widgets.active.weak_bg_fill = self.hover;
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_key() {
        for theme in ThemeKey::ALL {
            assert_eq!(ThemeKey::from_key(theme.key()), Some(theme));
        }
    }

    #[test]
    fn unknown_key_resolves_to_violet() {
        assert_eq!(ThemeKey::resolve(""), ThemeKey::Violet);
        assert_eq!(ThemeKey::resolve("Teal"), ThemeKey::Violet);
        assert_eq!(ThemeKey::resolve("teal"), ThemeKey::Teal);
    }

    #[test]
    fn presets_have_distinct_primaries() {
        let mut primaries: Vec<_> = ThemeKey::ALL
            .iter()
            .map(|t| t.palette().primary.to_array())
            .collect();
        primaries.sort();
        primaries.dedup();
        assert_eq!(primaries.len(), 4);
    }

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(
            serde_json::to_string(&ThemeKey::Sunset).expect("json"),
            "\"sunset\""
        );
    }
}
