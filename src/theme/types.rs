use std::path::PathBuf;

use ratatui::style::Color;

use crate::location::PermissionStatus;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color.
    pub base: Color,
    /// Background of modals and the navigation bar.
    pub mantle: Color,
    /// Muted border color.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for captions and labels.
    pub subtext: Color,
    /// Headings and the selected entry.
    pub accent: Color,
    /// Divisor under the active navigation tab.
    pub divisor: Color,
    /// Default landmark pins and the green route.
    pub green: Color,
    /// Itinerary pins and the yellow route.
    pub yellow: Color,
    /// User marker and error notices.
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            overlay: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0x74, 0xc7, 0xec),
            divisor: Color::Rgb(0xf9, 0xe2, 0xaf),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }
}

/// Which location service backs the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderKind {
    /// Fixed coordinates from `static_lat`/`static_lng`.
    #[default]
    Static,
    /// Coordinates re-read from `location_file` on every poll.
    File,
}

impl ProviderKind {
    /// Parse a `location_provider` value.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" | "fixed" => Some(Self::Static),
            "file" | "gps_file" => Some(Self::File),
            _ => None,
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Stored language preference; empty until the first run persists one.
    pub language: String,
    /// Directory holding `localization.json` and `dados_raulLino.json`.
    pub data_dir: Option<PathBuf>,
    /// Path or URL overriding the localization document.
    pub localization_source: Option<String>,
    /// Path or URL overriding the POI document.
    pub pois_source: Option<String>,
    /// Seconds between user-marker refreshes on the map.
    pub refresh_interval_secs: u64,
    /// Watch polling period in milliseconds.
    pub watch_maximum_age_ms: u64,
    /// Per-request position timeout in milliseconds.
    pub watch_timeout_ms: u64,
    /// Location service backend.
    pub location_provider: ProviderKind,
    /// Latitude reported by the static provider.
    pub static_lat: f64,
    /// Longitude reported by the static provider.
    pub static_lng: f64,
    /// File polled by the file provider.
    pub location_file: Option<PathBuf>,
    /// Permission answer given by the provider.
    pub location_permission: PermissionStatus,
    /// Whether location services report as enabled.
    pub location_enabled: bool,
    /// Colour palette.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: String::new(),
            data_dir: None,
            localization_source: None,
            pois_source: None,
            refresh_interval_secs: 5,
            watch_maximum_age_ms: 1000,
            watch_timeout_ms: 2000,
            location_provider: ProviderKind::Static,
            static_lat: 39.463_6,
            static_lng: -8.197_7,
            location_file: None,
            location_permission: PermissionStatus::Granted,
            location_enabled: true,
            theme: Theme::default(),
        }
    }
}
