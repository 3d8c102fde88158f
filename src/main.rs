//! Application entry point — Memora.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Resolve [`AppPaths`] and load [`Settings`] (default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers) for speech jobs and
//!    hover timers.
//! 4. Pick a speech engine; fall back to silence when none is installed.
//! 5. Wire the navigation and form controllers to the record store.
//! 6. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use eframe::egui;
use memora::{
    app::MemoraApp,
    config::{AppPaths, SettingsStore},
    forms::EntryFormController,
    nav::NavigationController,
    records::RecordStore,
    speech::{default_engine, Announcer, HoverDebouncer, SpeechNotifier},
};

const WINDOW_TITLE: &str = "MEMORA - Smart Memory Assistant";

fn native_options() -> eframe::NativeOptions {
    let vp = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([800.0, 700.0])
        .with_min_inner_size([520.0, 480.0]);

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Memora starting up");

    // 2. Paths + settings
    let paths = AppPaths::new();
    let settings_store = SettingsStore::from_paths(&paths);
    let settings = settings_store.load();
    log::info!(
        "Settings: theme={}, voice={} ({})",
        settings.theme,
        settings.voice,
        settings_store.path().display()
    );

    // 3. Tokio runtime (speech workers + hover timers)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|e| {
            log::error!("Failed to create tokio runtime: {e}");
            eframe::Error::AppCreation(Box::new(e))
        })?;

    // 4. Speech
    let engine = Arc::from(default_engine());
    let announcer: Arc<dyn Announcer> = Arc::new(SpeechNotifier::new(engine, rt.handle().clone()));

    // 5. Controllers
    let store = RecordStore::new(&paths.data_dir);
    log::info!("Record files in {}", store.dir().display());
    let nav = NavigationController::new(settings, settings_store, Arc::clone(&announcer));
    let forms = EntryFormController::new(store, Arc::clone(&announcer));
    let debouncer = HoverDebouncer::new(Arc::clone(&announcer), rt.handle().clone());

    // 6. Build the egui app and run it (blocks until the window is closed)
    let app = MemoraApp::new(nav, forms, debouncer);

    let result = eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(move |_cc| Ok(Box::new(app))),
    );

    // In-flight speech is not waited for.
    rt.shutdown_background();
    result
}
