//! Explicit application state rendered by the UI every frame.
//!
//! [`ApplicationState`] replaces scattered mutable widget globals: the UI is a
//! pure function of this value, so a theme change is a state update followed
//! by the next repaint.

use crate::config::Settings;
use crate::records::Category;

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// The logical pages of the window.
///
/// ```text
/// Home ──begin──▶ Menu ──open_category──▶ Content
///      ◀──back───      ◀──────back───────
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Title card with the "Begin Your Journey" button.
    #[default]
    Home,
    /// Category buttons plus the theme and voice controls.
    Menu,
    /// Entry form and actions for the active category.
    Content,
}

impl Page {
    /// Spoken summary of the page and its primary actions.
    ///
    /// `category` is only consulted for [`Page::Content`].
    pub fn announcement(self, category: Option<Category>) -> String {
        match self {
            Page::Home => "Welcome to Memora. Press Begin Your Journey to continue.".into(),
            Page::Menu => "Main menu. Options are Reminders, Notes, Contacts and Journal. \
                           Use the buttons to open a section. \
                           There is also a Theme button to change the appearance."
                .into(),
            Page::Content => match category {
                Some(category) => {
                    format!("{category} options: Save Entry, View Recent, and Search.")
                }
                None => "Content page. You can save entries, view recent items, or search.".into(),
            },
        }
    }

    /// A short label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Menu => "menu",
            Page::Content => "content",
        }
    }
}

// ---------------------------------------------------------------------------
// ApplicationState
// ---------------------------------------------------------------------------

/// Everything the renderer needs to draw the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationState {
    /// Currently visible page.
    pub page: Page,
    /// Category whose form is shown on the content page.
    pub category: Option<Category>,
    /// Theme preset and voice flag.
    pub settings: Settings,
    /// Bumped whenever the whole view must be rebuilt (theme switch).  The
    /// renderer drops transient widget state when it sees a new value.
    pub view_generation: u64,
}

impl ApplicationState {
    /// Initial state: home page, no category.
    pub fn new(settings: Settings) -> Self {
        Self {
            page: Page::Home,
            category: None,
            settings,
            view_generation: 0,
        }
    }

    /// Whether spoken announcements are on.
    pub fn voice_enabled(&self) -> bool {
        self.settings.voice
    }
}
