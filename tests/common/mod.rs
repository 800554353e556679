//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use linotour::app::{initialize_app_state, load_documents};
use linotour::args::Args;
use linotour::sources::DocumentSource;
use linotour::state::AppState;
use linotour::theme::load_settings_from;

/// Directory holding the shipped JSON documents.
pub fn shipped_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Build an `AppState` from the shipped documents and the settings at `settings_path`.
pub async fn shipped_app(settings_path: &Path, lang: Option<&str>) -> AppState {
    let dir = shipped_data_dir();
    let documents = load_documents(
        &DocumentSource::Path(dir.join("localization.json")),
        &DocumentSource::Path(dir.join("dados_raulLino.json")),
    )
    .await;
    let args = Args {
        lang: lang.map(str::to_string),
        ..Args::default()
    };
    let settings = load_settings_from(settings_path);
    let mut app = AppState::default();
    initialize_app_state(&mut app, &args, &settings, settings_path, documents);
    app
}

/// Key press event without modifiers.
pub fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
