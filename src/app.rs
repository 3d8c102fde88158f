//! Memora main window — egui/eframe application.
//!
//! # Architecture
//!
//! [`MemoraApp`] is the top-level [`eframe::App`].  Each frame it:
//!
//! 1. Re-applies the theme and drops transient widget state if the
//!    [`ApplicationState::view_generation`] moved (theme switch).
//! 2. Renders the page for [`ApplicationState::page`], plus any open dialog.
//! 3. Applies the [`Action`]s the widgets produced.
//!
//! Widgets never mutate navigation state directly; they only queue actions.
//!
//! # Pages
//!
//! | Page | Contents |
//! |------|----------|
//! | `Home` | Title card, feature highlights, "Begin Your Journey" |
//! | `Menu` | Category buttons, Theme button, Voice checkbox, Back |
//! | `Content` | Category form, Save / View Recent / Search, Back |

use eframe::egui::{self, Color32, RichText};

use crate::forms::{fields, EntryFormController, FormDraft, FormError};
use crate::nav::{ApplicationState, NavigationController, Page};
use crate::records::{summarize, Category, Record, Row};
use crate::speech::HoverDebouncer;
use crate::theme::{Palette, ThemeKey};

// ---------------------------------------------------------------------------
// Actions and dialogs
// ---------------------------------------------------------------------------

/// Something the user asked for during the current frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Begin,
    Back,
    OpenCategory(Category),
    OpenThemePicker,
    CloseThemePicker,
    SwitchTheme(ThemeKey),
    SetVoice(bool),
    SaveEntry,
    ViewRecent,
    OpenSearch,
    RunSearch,
    CloseSearch,
    CloseDialog,
}

/// Severity of a message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

/// A modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
}

impl Dialog {
    fn new(kind: DialogKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Widget state that lives only as long as the current view.  Dropped
/// wholesale on a theme switch.
#[derive(Debug, Default)]
struct ViewState {
    /// Inputs of the content-page form.
    draft: Option<FormDraft>,
    /// Open message box.
    dialog: Option<Dialog>,
    /// Search term being typed, while the search prompt is open.
    search_term: Option<String>,
    theme_picker_open: bool,
    /// Control the pointer rested on last frame.
    hovered: Option<String>,
    /// Control the pointer rests on this frame.
    hovered_now: Option<String>,
}

// ---------------------------------------------------------------------------
// MemoraApp
// ---------------------------------------------------------------------------

/// eframe application — the Memora window.
pub struct MemoraApp {
    nav: NavigationController,
    forms: EntryFormController,
    debouncer: HoverDebouncer,
    view: ViewState,
    /// `view_generation` the current visuals were built for.
    applied_generation: Option<u64>,
    actions: Vec<Action>,
}

impl MemoraApp {
    /// Create the app and speak the home greeting.
    pub fn new(
        mut nav: NavigationController,
        forms: EntryFormController,
        debouncer: HoverDebouncer,
    ) -> Self {
        nav.start();
        Self {
            nav,
            forms,
            debouncer,
            view: ViewState::default(),
            applied_generation: None,
            actions: Vec::new(),
        }
    }

    fn state(&self) -> &ApplicationState {
        self.nav.state()
    }

    fn palette(&self) -> Palette {
        self.state().settings.theme.palette()
    }

    // ── View rebuild ─────────────────────────────────────────────────────

    /// Apply the theme and reset widget state when the view generation moved.
    fn sync_view(&mut self, ctx: &egui::Context) {
        let generation = self.state().view_generation;
        if self.applied_generation == Some(generation) {
            return;
        }
        log::debug!("Rebuilding view (generation {generation})");
        self.palette().apply(ctx);
        self.debouncer.cancel_all();
        self.view = ViewState::default();
        if let Some(category) = self.state().category {
            self.view.draft = Some(FormDraft::new(category));
        }
        self.applied_generation = Some(generation);
    }

    // ── Hover announcements ──────────────────────────────────────────────

    fn track_hover(&mut self, control: &str, label: &str, hovered: bool) {
        if !hovered {
            return;
        }
        if self.view.hovered.as_deref() != Some(control) {
            let voice = self.state().voice_enabled();
            self.debouncer.schedule(control, label, voice);
        }
        self.view.hovered_now = Some(control.to_owned());
    }

    /// Cancel the pending announcement of a control the pointer just left.
    fn finish_hover(&mut self) {
        let now = self.view.hovered_now.take();
        if let Some(previous) = self.view.hovered.take() {
            if now.as_deref() != Some(previous.as_str()) {
                self.debouncer.cancel(&previous);
            }
        }
        self.view.hovered = now;
    }

    // ── Widgets ──────────────────────────────────────────────────────────

    /// Filled button that announces `speech` when hovered.  Returns `true`
    /// when clicked.
    fn button(
        &mut self,
        ui: &mut egui::Ui,
        control: &str,
        label: &str,
        speech: &str,
        fill: Color32,
        min_width: f32,
    ) -> bool {
        let response = ui.add(
            egui::Button::new(RichText::new(label).color(Color32::WHITE).strong().size(15.0))
                .fill(fill)
                .min_size(egui::vec2(min_width, 36.0)),
        );
        self.track_hover(control, speech, response.hovered());
        response.clicked()
    }

    fn card_frame(&self) -> egui::Frame {
        egui::Frame::new()
            .fill(self.palette().card)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(16))
    }

    // ── Pages ────────────────────────────────────────────────────────────

    fn draw_home(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        ui.add_space(40.0);
        self.card_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("MEMORA")
                        .size(48.0)
                        .strong()
                        .color(palette.primary),
                );
                ui.label(RichText::new("Your Intelligent Memory Companion").size(16.0));
                ui.add_space(24.0);

                ui.columns(3, |columns| {
                    let features = [
                        ("Smart Organization", "Keep everything in order"),
                        ("Timely Reminders", "Never miss important tasks"),
                        ("Easy Access", "Simple and intuitive interface"),
                    ];
                    for (column, (title, text)) in columns.iter_mut().zip(features) {
                        column.vertical_centered(|ui| {
                            ui.label(RichText::new(title).size(14.0).strong());
                            ui.label(RichText::new(text).size(10.0));
                        });
                    }
                });

                ui.add_space(24.0);
                if self.button(
                    ui,
                    "home.begin",
                    "Begin Your Journey →",
                    "Begin Your Journey",
                    palette.primary,
                    220.0,
                ) {
                    self.actions.push(Action::Begin);
                }
            });
        });
    }

    fn draw_menu(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        let mut voice = self.state().voice_enabled();

        ui.horizontal(|ui| {
            ui.heading(RichText::new("Choose Category").size(18.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.button(ui, "menu.theme", "Theme", "Theme", palette.secondary, 100.0) {
                    self.actions.push(Action::OpenThemePicker);
                }
                if ui.checkbox(&mut voice, "Voice").changed() {
                    self.actions.push(Action::SetVoice(voice));
                }
            });
        });

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            for category in Category::ALL {
                let control = format!("menu.{}", category.name().to_lowercase());
                if self.button(
                    ui,
                    &control,
                    category.name(),
                    category.name(),
                    palette.primary,
                    260.0,
                ) {
                    self.actions.push(Action::OpenCategory(category));
                }
                ui.add_space(12.0);
            }

            ui.add_space(20.0);
            if self.button(
                ui,
                "menu.back",
                "← Back to Home",
                "Back to Home",
                palette.secondary,
                160.0,
            ) {
                self.actions.push(Action::Back);
            }
        });
    }

    fn draw_content(&mut self, ui: &mut egui::Ui) {
        let Some(category) = self.state().category else {
            return;
        };
        let palette = self.palette();
        if self.view.draft.as_ref().map(FormDraft::category) != Some(category) {
            self.view.draft = Some(FormDraft::new(category));
        }

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{category}: Quick Entry"))
                    .size(20.0)
                    .strong()
                    .color(palette.primary),
            );
        });
        ui.add_space(16.0);

        let frame = self.card_frame();
        if let Some(draft) = self.view.draft.as_mut() {
            frame.show(ui, |ui| {
                ui.set_width(ui.available_width());
                for (spec, value) in fields(category).iter().zip(draft.values.iter_mut()) {
                    ui.label(spec.label);
                    if spec.multiline {
                        ui.add(
                            egui::TextEdit::multiline(value)
                                .desired_rows(6)
                                .desired_width(f32::INFINITY),
                        );
                    } else {
                        ui.add(egui::TextEdit::singleline(value).desired_width(320.0));
                    }
                    ui.add_space(4.0);
                }
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if self.button(ui, "content.save", "Save Entry", "Save Entry", palette.primary, 0.0) {
                self.actions.push(Action::SaveEntry);
            }
            if self.button(
                ui,
                "content.recent",
                "View Recent",
                "View Recent",
                palette.secondary,
                0.0,
            ) {
                self.actions.push(Action::ViewRecent);
            }
            if self.button(ui, "content.search", "Search", "Search", palette.secondary, 0.0) {
                self.actions.push(Action::OpenSearch);
            }
        });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            if self.button(
                ui,
                "content.back",
                "← Back to Menu",
                "Back to Menu",
                palette.secondary,
                160.0,
            ) {
                self.actions.push(Action::Back);
            }
        });
    }

    // ── Windows ──────────────────────────────────────────────────────────

    fn draw_theme_picker(&mut self, ctx: &egui::Context) {
        if !self.view.theme_picker_open {
            return;
        }
        egui::Window::new("Pick Theme")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new("Choose a theme preset").size(12.0).strong());
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    for theme in ThemeKey::ALL {
                        let control = format!("theme.{}", theme.key());
                        if self.button(
                            ui,
                            &control,
                            theme.label(),
                            theme.label(),
                            theme.palette().primary,
                            70.0,
                        ) {
                            self.actions.push(Action::SwitchTheme(theme));
                        }
                    }
                });
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    self.actions.push(Action::CloseThemePicker);
                }
            });
    }

    fn draw_search_prompt(&mut self, ctx: &egui::Context) {
        let Some(term) = self.view.search_term.as_mut() else {
            return;
        };
        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Search")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Enter search term:");
                ui.add(egui::TextEdit::singleline(term).desired_width(240.0))
                    .request_focus();
                submit = ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.horizontal(|ui| {
                    submit |= ui.button("OK").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });
        if submit {
            self.actions.push(Action::RunSearch);
        } else if cancel {
            self.actions.push(Action::CloseSearch);
        }
    }

    fn draw_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.view.dialog.as_ref() else {
            return;
        };
        let palette = self.palette();
        let title_color = match dialog.kind {
            DialogKind::Info => palette.primary,
            DialogKind::Warning | DialogKind::Error => palette.accent,
        };
        let mut close = false;
        egui::Window::new(RichText::new(&dialog.title).color(title_color))
            .id(egui::Id::new("memora.dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    ui.label(&dialog.body);
                });
                ui.add_space(8.0);
                close = ui.button("OK").clicked();
            });
        if close {
            self.actions.push(Action::CloseDialog);
        }
    }

    // ── Action handling ──────────────────────────────────────────────────

    /// Apply one queued action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Begin => {
                self.nav.begin();
            }
            Action::Back => {
                self.nav.back();
                self.view.draft = None;
            }
            Action::OpenCategory(category) => {
                if self.nav.open_category(category) {
                    self.view.draft = Some(FormDraft::new(category));
                }
            }
            Action::OpenThemePicker => {
                self.view.theme_picker_open = true;
                self.nav.open_theme_picker();
            }
            Action::CloseThemePicker => self.view.theme_picker_open = false,
            Action::SwitchTheme(theme) => {
                self.view.theme_picker_open = false;
                self.nav.switch_theme(theme);
            }
            Action::SetVoice(enabled) => self.nav.set_voice(enabled),
            Action::SaveEntry => self.save_entry(),
            Action::ViewRecent => self.view_recent(),
            Action::OpenSearch => self.view.search_term = Some(String::new()),
            Action::RunSearch => self.run_search(),
            Action::CloseSearch => self.view.search_term = None,
            Action::CloseDialog => self.view.dialog = None,
        }
    }

    fn save_entry(&mut self) {
        let voice = self.state().voice_enabled();
        let Some(draft) = self.view.draft.as_mut() else {
            return;
        };
        let now = chrono::Local::now().naive_local();
        let dialog = match self.forms.submit(draft, now, voice) {
            Ok(_) => {
                draft.clear();
                Dialog::new(DialogKind::Info, "Success", "Entry saved!")
            }
            Err(e @ FormError::Missing(_)) => {
                Dialog::new(DialogKind::Warning, "Missing", e.to_string())
            }
            Err(e) => {
                log::warn!("{e}");
                Dialog::new(DialogKind::Error, "Error", e.to_string())
            }
        };
        self.view.dialog = Some(dialog);
    }

    fn view_recent(&mut self) {
        let Some(category) = self.state().category else {
            return;
        };
        let dialog = match self.forms.recent(category) {
            Ok(rows) => Dialog::new(
                DialogKind::Info,
                category.name(),
                rows_or(category, &rows, "No entries found"),
            ),
            Err(e) => {
                log::warn!("Reading {category} failed: {e}");
                Dialog::new(DialogKind::Error, "Error", format!("Could not read entries: {e}"))
            }
        };
        self.view.dialog = Some(dialog);
    }

    fn run_search(&mut self) {
        let Some(term) = self.view.search_term.take() else {
            return;
        };
        let Some(category) = self.state().category else {
            return;
        };
        if term.trim().is_empty() {
            return;
        }
        if !self.forms.store().path_for(category).exists() {
            self.view.dialog = Some(Dialog::new(
                DialogKind::Info,
                "Search",
                "No entries to search",
            ));
            return;
        }
        let dialog = match self.forms.search(category, &term) {
            Ok(rows) => Dialog::new(
                DialogKind::Info,
                "Search Results",
                rows_or(category, &rows, "No matches found"),
            ),
            Err(e) => {
                log::warn!("Searching {category} failed: {e}");
                Dialog::new(DialogKind::Error, "Error", format!("Could not search entries: {e}"))
            }
        };
        self.view.dialog = Some(dialog);
    }

    /// Currently open dialog, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.view.dialog.as_ref()
    }

    /// Mutable access to the content-page form inputs.
    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        self.view.draft.as_mut()
    }

    /// Current navigation state.
    pub fn application_state(&self) -> &ApplicationState {
        self.state()
    }
}

/// Rows as one line each, or `empty` when there are none.  Rows that do not
/// fit the category's layout are shown as raw fields.
fn rows_or(category: Category, rows: &[Row], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_owned();
    }
    rows.iter()
        .map(|row| match Record::from_row(category, row) {
            Some(record) => record.summary(),
            None => summarize(row),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for MemoraApp {
    /// Called every frame by eframe.  Renders the current state, then applies
    /// whatever the user did.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_view(ctx);

        let frame = egui::Frame::new()
            .fill(self.palette().bg)
            .inner_margin(egui::Margin::same(20));

        let page = self.state().page;
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            match page {
                Page::Home => self.draw_home(ui),
                Page::Menu => self.draw_menu(ui),
                Page::Content => self.draw_content(ui),
            }
        });

        self.draw_theme_picker(ctx);
        self.draw_search_prompt(ctx);
        self.draw_dialog(ctx);
        self.finish_hover();

        for action in std::mem::take(&mut self.actions) {
            log::trace!("action: {action:?}");
            self.apply(action);
        }
        if self.applied_generation != Some(self.state().view_generation) {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Memora closing");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::{Settings, SettingsStore};
    use crate::records::RecordStore;
    use crate::speech::RecordingAnnouncer;
    use tempfile::{tempdir, TempDir};
    use tokio::runtime::Handle;

    fn app() -> (TempDir, Arc<RecordingAnnouncer>, MemoraApp) {
        let dir = tempdir().expect("temp dir");
        let announcer = Arc::new(RecordingAnnouncer::default());
        let nav = NavigationController::new(
            Settings::default(),
            SettingsStore::new(dir.path().join("memora_settings.json")),
            announcer.clone(),
        );
        let forms = EntryFormController::new(RecordStore::new(dir.path()), announcer.clone());
        let debouncer = HoverDebouncer::new(announcer.clone(), Handle::current());
        (dir, announcer, MemoraApp::new(nav, forms, debouncer))
    }

    #[tokio::test]
    async fn startup_greets_once() {
        let (_dir, announcer, _app) = app();
        assert_eq!(
            announcer.spoken(),
            ["Welcome to Memora. Press Begin Your Journey to continue."]
        );
    }

    #[tokio::test]
    async fn save_with_missing_field_shows_warning() {
        let (_dir, _announcer, mut app) = app();
        app.apply(Action::Begin);
        app.apply(Action::OpenCategory(Category::Reminders));
        app.draft_mut().expect("draft").values[1] = "09:00".into();

        app.apply(Action::SaveEntry);

        let dialog = app.dialog().expect("dialog");
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.body, "Please enter title and time");
    }

    #[tokio::test]
    async fn save_then_view_recent() {
        let (_dir, announcer, mut app) = app();
        app.apply(Action::Begin);
        app.apply(Action::OpenCategory(Category::Contacts));
        let draft = app.draft_mut().expect("draft");
        draft.values = ["Alice".into(), "111".into()];

        app.apply(Action::SaveEntry);
        assert_eq!(app.dialog().map(|d| d.body.as_str()), Some("Entry saved!"));
        assert_eq!(announcer.spoken().last().map(String::as_str), Some("Entry saved"));
        assert_eq!(*app.draft_mut().expect("draft"), FormDraft::new(Category::Contacts));

        app.apply(Action::CloseDialog);
        app.apply(Action::ViewRecent);
        let dialog = app.dialog().expect("dialog");
        assert_eq!(dialog.title, "Contacts");
        assert_eq!(dialog.body, "Alice | 111");
    }

    #[tokio::test]
    async fn search_reports_missing_file_and_no_matches() {
        let (_dir, _announcer, mut app) = app();
        app.apply(Action::Begin);
        app.apply(Action::OpenCategory(Category::Notes));

        app.apply(Action::OpenSearch);
        app.view.search_term = Some("idea".into());
        app.apply(Action::RunSearch);
        assert_eq!(app.dialog().map(|d| d.body.as_str()), Some("No entries to search"));

        app.apply(Action::CloseDialog);
        app.draft_mut().expect("draft").values = ["Ideas".into(), "garden".into()];
        app.apply(Action::SaveEntry);
        app.apply(Action::CloseDialog);

        app.apply(Action::OpenSearch);
        app.view.search_term = Some("zzz".into());
        app.apply(Action::RunSearch);
        assert_eq!(app.dialog().map(|d| d.body.as_str()), Some("No matches found"));
    }

    #[tokio::test]
    async fn view_recent_on_empty_category() {
        let (_dir, _announcer, mut app) = app();
        app.apply(Action::Begin);
        app.apply(Action::OpenCategory(Category::Journal));
        app.apply(Action::ViewRecent);
        assert_eq!(app.dialog().map(|d| d.body.as_str()), Some("No entries found"));
    }

    #[tokio::test]
    async fn theme_switch_closes_picker_and_returns_to_menu() {
        let (_dir, _announcer, mut app) = app();
        app.apply(Action::Begin);
        app.apply(Action::OpenThemePicker);
        assert!(app.view.theme_picker_open);

        app.apply(Action::SwitchTheme(ThemeKey::Sunset));
        assert!(!app.view.theme_picker_open);
        assert_eq!(app.application_state().page, Page::Menu);
        assert_eq!(app.application_state().settings.theme, ThemeKey::Sunset);
    }

    #[test]
    fn rows_or_joins_lines() {
        let rows: Vec<Row> = vec![
            vec!["Bob".into(), "222".into()],
            vec!["Carol".into(), "333".into()],
        ];
        assert_eq!(
            rows_or(Category::Contacts, &rows, "none"),
            "Bob | 222\nCarol | 333"
        );
        assert_eq!(rows_or(Category::Contacts, &[], "none"), "none");
    }

    #[test]
    fn rows_or_formats_typed_reminders() {
        let rows: Vec<Row> = vec![
            vec!["2024-05-01".into(), "08:00".into(), "Dentist".into()],
            vec!["short".into()],
        ];
        assert_eq!(
            rows_or(Category::Reminders, &rows, "none"),
            "2024-05-01 08:00 | Dentist\nshort"
        );
    }
}
