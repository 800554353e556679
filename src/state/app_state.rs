//! Central `AppState` container, owned by the event loop.

use std::path::PathBuf;
use std::time::Duration;

use crate::data::{DEFAULT_LANGUAGE, PoiStore};
use crate::i18n::{LocalizationBundle, UiStrings};
use crate::location::session::DEFAULT_REFRESH_INTERVAL;
use crate::location::{DenialTracker, Position, WatchOptions};
use crate::map::{AmplifiedImage, Description, MarkerManager};
use crate::state::{Modal, View};

/// Global application state shared by the event, logic and UI layers.
///
/// Replaces the module-level globals of a browser app (current view, map
/// handle, last position, marker flag) with one explicitly passed struct.
#[derive(Debug)]
pub struct AppState {
    /// The single visible view.
    pub current_view: View,
    /// Navigation tab carrying the divisor highlight; none while a detail view is shown.
    pub highlighted_tab: Option<View>,
    /// Active language code.
    pub language: String,
    /// Localization bundle (read-only after load).
    pub localization: LocalizationBundle,
    /// Landmark data (read-only after load).
    pub pois: PoiStore,
    /// Static page text for the active language.
    pub page_text: UiStrings,
    /// Vertical scroll offset of the text pages (home, bio, description).
    pub page_scroll: u16,
    /// Language selector entries.
    pub language_options: Vec<String>,
    /// Highlighted entry in the language selector.
    pub language_cursor: usize,
    /// Map markers; `None` until the map view is first entered.
    pub markers: Option<MarkerManager>,
    /// Last known user position.
    pub user_position: Option<Position>,
    /// Content of the description view.
    pub description: Option<Description>,
    /// Content of the amplified-image view.
    pub amplified: Option<AmplifiedImage>,
    /// Open modal, if any.
    pub modal: Modal,
    /// Remembers location permission denials for this session.
    pub denials: DenialTracker,
    /// Whether a location session (ticker + watch) is running.
    pub location_session_active: bool,
    /// Period of the user-marker refresh while on the map.
    pub refresh_interval: Duration,
    /// Watch polling/timeout parameters.
    pub watch_options: WatchOptions,
    /// Settings file the language preference is written to; `None` disables persistence.
    pub settings_path: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::Home,
            highlighted_tab: Some(View::Home),
            language: DEFAULT_LANGUAGE.to_string(),
            localization: LocalizationBundle::default(),
            pois: PoiStore::default(),
            page_text: UiStrings::default(),
            page_scroll: 0,
            language_options: Vec::new(),
            language_cursor: 0,
            markers: None,
            user_position: None,
            description: None,
            amplified: None,
            modal: Modal::None,
            denials: DenialTracker::default(),
            location_session_active: false,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            watch_options: WatchOptions::default(),
            settings_path: None,
        }
    }
}

impl AppState {
    /// Whether `view` is the one on screen.
    #[must_use]
    pub fn is_visible(&self, view: View) -> bool {
        self.current_view == view
    }

    /// Views currently on screen (always exactly one).
    #[must_use]
    pub fn visible_views(&self) -> Vec<View> {
        View::ALL
            .into_iter()
            .filter(|v| self.is_visible(*v))
            .collect()
    }

    /// Whether the user marker is on the map.
    #[must_use]
    pub fn marker_exists(&self) -> bool {
        self.markers
            .as_ref()
            .is_some_and(MarkerManager::marker_exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_on_home_in_portuguese() {
        let app = AppState::default();
        assert_eq!(app.visible_views(), vec![View::Home]);
        assert_eq!(app.highlighted_tab, Some(View::Home));
        assert_eq!(app.language, "pt-PT");
        assert!(!app.marker_exists());
        assert!(!app.modal.is_open());
        assert_eq!(app.refresh_interval, Duration::from_secs(5));
    }
}
