use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::args::Args;
use crate::data::{PoiDocument, PoiStore};
use crate::geo::LatLng;
use crate::i18n::LocalizationBundle;
use crate::location::{FileProvider, LocationProvider, StaticProvider, WatchOptions};
use crate::logic::{initial_language, load_language_content};
use crate::sources::{DocumentSource, fetch_document};
use crate::state::AppState;
use crate::theme::{ProviderKind, Settings};

/// File name of the UI-string bundle inside the data directory.
pub const LOCALIZATION_FILE: &str = "localization.json";
/// File name of the landmark document inside the data directory.
pub const POIS_FILE: &str = "dados_raulLino.json";

/// What: Pick the directory holding the bundled documents.
///
/// Inputs:
/// - `cli`: `--data-dir` value
/// - `configured`: `data_dir` from settings
///
/// Output:
/// - First of: CLI, settings, `./data` when present, the crate's `data/` directory
#[must_use]
pub fn resolve_data_dir(cli: Option<&Path>, configured: Option<&Path>) -> PathBuf {
    if let Some(p) = cli.or(configured) {
        return p.to_path_buf();
    }
    let local = PathBuf::from("data");
    if local.is_dir() {
        return local;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// What: Load the localization bundle and the landmark document concurrently.
///
/// Inputs:
/// - `localization`: Source of `localization.json`
/// - `pois`: Source of `dados_raulLino.json`
///
/// Output:
/// - Bundle and store; each one is empty when its load failed
///
/// Details:
/// - Both fetches run under `tokio::join!`; each is attempted once.
/// - Failures are logged and leave the dependent text or markers empty.
pub async fn load_documents(
    localization: &DocumentSource,
    pois: &DocumentSource,
) -> (LocalizationBundle, PoiStore) {
    let (loc_res, poi_res) = tokio::join!(
        fetch_document::<LocalizationBundle>(localization),
        fetch_document::<PoiDocument>(pois)
    );
    let bundle = match loc_res {
        Ok(b) => {
            tracing::info!(languages = ?b.languages(), "localization loaded");
            b
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load localization");
            LocalizationBundle::default()
        }
    };
    let store = match poi_res {
        Ok(doc) => PoiStore::from_document(doc),
        Err(e) => {
            tracing::error!(error = %e, "failed to load points of interest");
            PoiStore::default()
        }
    };
    (bundle, store)
}

/// What: Build the location provider described by the settings.
///
/// Inputs:
/// - `settings`: Parsed settings
/// - `settings_path`: File opened by the "open settings" shortcut
///
/// Output:
/// - Shared provider handle
#[must_use]
pub fn build_provider(settings: &Settings, settings_path: &Path) -> Arc<dyn LocationProvider> {
    match (settings.location_provider, settings.location_file.as_ref()) {
        (ProviderKind::File, Some(file)) => {
            tracing::info!(path = %file.display(), "using file location provider");
            Arc::new(
                FileProvider::new(file.clone())
                    .with_permission(settings.location_permission)
                    .with_settings_path(settings_path.to_path_buf()),
            )
        }
        (kind, _) => {
            if kind == ProviderKind::File {
                tracing::warn!("location_provider = file without location_file; using static provider");
            }
            let coords = LatLng::new(settings.static_lat, settings.static_lng);
            tracing::info!(lat = coords.lat, lng = coords.lng, "using static location provider");
            Arc::new(
                StaticProvider::new(coords)
                    .with_permission(settings.location_permission)
                    .with_enabled(settings.location_enabled)
                    .with_settings_path(settings_path.to_path_buf()),
            )
        }
    }
}

/// What: Populate the application state from settings, arguments and loaded documents.
///
/// Inputs:
/// - `app`: State to fill
/// - `args`: Command-line arguments
/// - `settings`: Parsed settings
/// - `settings_path`: Where the language preference is persisted
/// - `documents`: Loaded bundle and landmark store
///
/// Details:
/// - The language comes from `--lang`, then settings, then `pt-PT`; a choice
///   not yet on disk is persisted.
pub fn initialize_app_state(
    app: &mut AppState,
    args: &Args,
    settings: &Settings,
    settings_path: &Path,
    documents: (LocalizationBundle, PoiStore),
) {
    let (bundle, store) = documents;
    app.localization = bundle;
    app.pois = store;
    app.settings_path = Some(settings_path.to_path_buf());
    app.refresh_interval = Duration::from_secs(settings.refresh_interval_secs);
    app.watch_options = WatchOptions {
        maximum_age: Duration::from_millis(settings.watch_maximum_age_ms),
        timeout: Duration::from_millis(settings.watch_timeout_ms),
    };

    let (language, persist) = initial_language(args.lang.as_deref(), &settings.language);
    if persist && let Err(e) = crate::theme::save_language_to(settings_path, &language) {
        tracing::warn!(error = %e, "failed to persist initial language");
    }
    app.language = language;
    load_language_content(app);
    tracing::info!(language = %app.language, "application state initialised");
}
