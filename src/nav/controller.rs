//! Page transitions, theme switching and the voice toggle.
//!
//! Every successful transition produces exactly one page announcement.  A
//! transition requested from the wrong page is ignored and announces nothing.

use std::sync::Arc;

use crate::config::{Settings, SettingsStore};
use crate::records::Category;
use crate::speech::Announcer;
use crate::theme::ThemeKey;

use super::state::{ApplicationState, Page};

/// Spoken when the theme picker opens.
pub const THEME_PICKER_ANNOUNCEMENT: &str =
    "Theme picker. Available themes: Violet, Teal, Sunset, and Forest. Click a button to apply.";

/// Owns the [`ApplicationState`] and applies navigation events to it.
pub struct NavigationController {
    state: ApplicationState,
    settings_store: SettingsStore,
    announcer: Arc<dyn Announcer>,
}

impl NavigationController {
    /// Controller positioned on the home page.  Nothing is announced until
    /// [`start`](Self::start).
    pub fn new(
        settings: Settings,
        settings_store: SettingsStore,
        announcer: Arc<dyn Announcer>,
    ) -> Self {
        Self {
            state: ApplicationState::new(settings),
            settings_store,
            announcer,
        }
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Speak the home page greeting once the window is up.
    pub fn start(&mut self) {
        self.enter(Page::Home);
    }

    /// `home -> menu`.
    pub fn begin(&mut self) -> bool {
        if self.state.page != Page::Home {
            log::debug!("begin ignored on {}", self.state.page.label());
            return false;
        }
        self.enter(Page::Menu);
        true
    }

    /// `menu -> content` for `category`.
    pub fn open_category(&mut self, category: Category) -> bool {
        if self.state.page != Page::Menu {
            log::debug!("open {category} ignored on {}", self.state.page.label());
            return false;
        }
        self.state.category = Some(category);
        self.enter(Page::Content);
        true
    }

    /// `content -> menu` or `menu -> home`.  No-op on the home page.
    pub fn back(&mut self) -> bool {
        match self.state.page {
            Page::Content => {
                self.state.category = None;
                self.enter(Page::Menu);
                true
            }
            Page::Menu => {
                self.enter(Page::Home);
                true
            }
            Page::Home => false,
        }
    }

    /// Announce the theme picker's choices.
    pub fn open_theme_picker(&self) {
        self.announcer
            .announce(THEME_PICKER_ANNOUNCEMENT, self.state.voice_enabled());
    }

    /// Apply `theme`, rebuild the view and land on the menu page.
    pub fn switch_theme(&mut self, theme: ThemeKey) {
        log::info!("Switching theme to {theme}");
        self.state.settings.theme = theme;
        self.state.view_generation += 1;
        self.state.category = None;
        self.enter(Page::Menu);
        self.settings_store.save(&self.state.settings);
        self.announcer.announce(
            &format!("Theme switched to {theme}"),
            self.state.voice_enabled(),
        );
    }

    /// Turn spoken feedback on or off and persist the choice.
    pub fn set_voice(&mut self, enabled: bool) {
        self.state.settings.voice = enabled;
        self.settings_store.save(&self.state.settings);
        if enabled {
            self.announcer.announce("Voice enabled", true);
        } else {
            self.announcer.announce_always("Voice disabled");
        }
    }

    fn enter(&mut self, page: Page) {
        log::debug!("{} -> {}", self.state.page.label(), page.label());
        self.state.page = page;
        let text = page.announcement(self.state.category);
        self.announcer.announce(&text, self.state.voice_enabled());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::RecordingAnnouncer;
    use tempfile::{tempdir, TempDir};

    fn controller(settings: Settings) -> (TempDir, Arc<RecordingAnnouncer>, NavigationController) {
        let dir = tempdir().expect("temp dir");
        let store = SettingsStore::new(dir.path().join("memora_settings.json"));
        let announcer = Arc::new(RecordingAnnouncer::default());
        let nav = NavigationController::new(settings, store, announcer.clone());
        (dir, announcer, nav)
    }

    #[test]
    fn begin_goes_to_menu_with_one_announcement() {
        let (_dir, announcer, mut nav) = controller(Settings::default());

        assert!(nav.begin());
        assert_eq!(nav.state().page, Page::Menu);

        let calls = announcer.calls();
        assert_eq!(calls.len(), 1);
        let (text, enabled) = &calls[0];
        assert!(*enabled);
        for name in ["Reminders", "Notes", "Contacts", "Journal", "Theme"] {
            assert!(text.contains(name), "announcement lacks {name}");
        }
    }

    #[test]
    fn open_category_sets_context_and_announces_actions() {
        let (_dir, announcer, mut nav) = controller(Settings::default());
        nav.begin();

        assert!(nav.open_category(Category::Journal));
        assert_eq!(nav.state().page, Page::Content);
        assert_eq!(nav.state().category, Some(Category::Journal));
        assert_eq!(
            announcer.spoken().last().map(String::as_str),
            Some("Journal options: Save Entry, View Recent, and Search.")
        );
        assert_eq!(announcer.calls().len(), 2);
    }

    #[test]
    fn back_walks_content_menu_home() {
        let (_dir, announcer, mut nav) = controller(Settings::default());
        nav.begin();
        nav.open_category(Category::Notes);

        assert!(nav.back());
        assert_eq!(nav.state().page, Page::Menu);
        assert_eq!(nav.state().category, None);

        assert!(nav.back());
        assert_eq!(nav.state().page, Page::Home);

        assert!(!nav.back());
        assert_eq!(announcer.calls().len(), 4);
    }

    #[test]
    fn invalid_transitions_are_silent() {
        let (_dir, announcer, mut nav) = controller(Settings::default());

        assert!(!nav.open_category(Category::Contacts));
        nav.begin();
        assert!(!nav.begin());

        assert_eq!(nav.state().page, Page::Menu);
        assert_eq!(announcer.calls().len(), 1);
    }

    #[test]
    fn start_greets_on_home() {
        let (_dir, announcer, mut nav) = controller(Settings::default());
        nav.start();

        assert_eq!(nav.state().page, Page::Home);
        assert_eq!(
            announcer.spoken(),
            ["Welcome to Memora. Press Begin Your Journey to continue."]
        );
    }

    #[test]
    fn announcements_follow_voice_flag() {
        let (_dir, announcer, mut nav) = controller(Settings {
            theme: ThemeKey::Violet,
            voice: false,
        });
        nav.begin();

        assert_eq!(announcer.calls().len(), 1);
        assert!(announcer.spoken().is_empty());
    }

    #[test]
    fn theme_switch_rebuilds_persists_and_lands_on_menu() {
        let (dir, announcer, mut nav) = controller(Settings::default());
        nav.begin();
        nav.open_category(Category::Contacts);
        let generation = nav.state().view_generation;

        nav.switch_theme(ThemeKey::Teal);

        let state = nav.state();
        assert_eq!(state.page, Page::Menu);
        assert_eq!(state.category, None);
        assert_eq!(state.settings.theme, ThemeKey::Teal);
        assert_eq!(state.view_generation, generation + 1);

        let stored = SettingsStore::new(dir.path().join("memora_settings.json")).load();
        assert_eq!(stored.theme, ThemeKey::Teal);

        let spoken = announcer.spoken();
        assert!(spoken[spoken.len() - 2].starts_with("Main menu."));
        assert_eq!(spoken.last().map(String::as_str), Some("Theme switched to teal"));
    }

    #[test]
    fn theme_switch_from_home_still_enters_menu() {
        let (_dir, _announcer, mut nav) = controller(Settings::default());
        nav.switch_theme(ThemeKey::Forest);
        assert_eq!(nav.state().page, Page::Menu);
    }

    #[test]
    fn voice_toggle_persists_and_confirms() {
        let (dir, announcer, mut nav) = controller(Settings::default());

        nav.set_voice(false);
        assert!(!nav.state().voice_enabled());
        let stored = SettingsStore::new(dir.path().join("memora_settings.json")).load();
        assert!(!stored.voice);
        assert_eq!(announcer.spoken(), ["Voice disabled"]);

        nav.set_voice(true);
        assert_eq!(announcer.spoken(), ["Voice disabled", "Voice enabled"]);
    }

    #[test]
    fn theme_picker_announcement_respects_voice() {
        let (_dir, announcer, nav) = controller(Settings::default());
        nav.open_theme_picker();
        assert_eq!(announcer.spoken(), [THEME_PICKER_ANNOUNCEMENT]);
    }
}
