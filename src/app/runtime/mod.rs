use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::Args;
use crate::sources::DocumentSource;
use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
pub mod handlers;
pub mod init;

use background::spawn_event_thread;
use channels::Channels;
use event_loop::run_event_loop;
use handlers::LocationRuntime;
use init::{LOCALIZATION_FILE, POIS_FILE, build_provider, initialize_app_state, load_documents, resolve_data_dir};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the linotour TUI end-to-end.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` when the terminal cannot be set up.
///
/// Details:
/// - Config/state: loads settings (writing the skeleton on first run), resolves
///   document sources and loads both documents concurrently.
/// - Background tasks: terminal input thread; location requests and the
///   location session are spawned on demand by the event loop.
/// - Cleanup: stops the location session and restores terminal modes.
pub async fn run(args: Args) -> Result<()> {
    let headless = std::env::var("LINOTOUR_TEST_HEADLESS").ok().as_deref() == Some("1");

    let settings_path = crate::theme::settings_path();
    let settings = crate::theme::load_settings_from(&settings_path);
    crate::theme::set_theme(settings.theme);

    let data_dir = resolve_data_dir(args.data_dir.as_deref(), settings.data_dir.as_deref());
    let pick = |cli: Option<&String>, cfg: Option<&String>| {
        cli.or(cfg).map(String::as_str).unwrap_or_default().to_string()
    };
    let localization_src = DocumentSource::resolve(
        &pick(args.localization.as_ref(), settings.localization_source.as_ref()),
        &data_dir,
        LOCALIZATION_FILE,
    );
    let pois_src = DocumentSource::resolve(
        &pick(args.pois.as_ref(), settings.pois_source.as_ref()),
        &data_dir,
        POIS_FILE,
    );
    tracing::info!(
        data_dir = %data_dir.display(),
        localization = ?localization_src,
        pois = ?pois_src,
        "[Runtime] document sources"
    );
    let documents = load_documents(&localization_src, &pois_src).await;

    let mut app = AppState::default();
    initialize_app_state(&mut app, &args, &settings, &settings_path, documents);

    let mut channels = Channels::new();
    let provider = build_provider(&settings, &settings_path);
    let mut location = LocationRuntime::new(provider, channels.location_tx.clone());

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels, &mut location).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
