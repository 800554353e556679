//! Typed UI string tree for one language.
//!
//! Field names follow the keys of the localization document; missing leaves
//! deserialize to empty strings so a partial translation still renders.

use serde::Deserialize;

/// Title and paragraph sequence of a static page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageStrings {
    /// Page heading.
    pub title: String,
    /// Body paragraphs in display order.
    pub paragraphs: Vec<String>,
}

/// Strings used by the map page and the description carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapStrings {
    /// Map page heading.
    pub title: String,
    /// Carousel "previous" control label.
    pub previous: String,
    /// Carousel "next" control label.
    pub next: String,
}

/// Strings used by the settings page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsStrings {
    /// Settings page heading.
    pub title: String,
    /// Label for the language selector.
    pub language: String,
}

/// Location notices.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationStrings {
    /// Shown when the one-shot position request fails.
    pub error: String,
    /// Shown when location services are switched off.
    pub deactivated: String,
    /// Shown when the location permission is denied.
    pub denied: String,
    /// Dismiss button of the denial notice.
    pub cancel: String,
    /// Button that opens the location settings.
    #[serde(rename = "open-settings")]
    pub open_settings: String,
}

impl Default for LocationStrings {
    fn default() -> Self {
        Self {
            error: String::new(),
            deactivated: String::new(),
            denied: "Permissão de localização negada. Para que a app funcione corretamente ative-a nas definições.".to_string(),
            cancel: "Cancelar".to_string(),
            open_settings: "Ir Para Definições".to_string(),
        }
    }
}

/// Every UI string for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiStrings {
    /// Application header.
    #[serde(rename = "main-title")]
    pub main_title: String,
    /// Architect name shown under the header.
    pub title: String,
    /// Home page.
    pub home: PageStrings,
    /// Biography page.
    pub bio: PageStrings,
    /// Map page and carousel controls.
    pub map: MapStrings,
    /// Settings page.
    pub settings: SettingsStrings,
    /// Location notices.
    pub location: LocationStrings,
    /// Label for a landmark's year.
    pub year: String,
    /// Label for a landmark's address.
    pub address: String,
    /// Label for a landmark's building type.
    #[serde(rename = "type-of-building")]
    pub type_of_building: String,
}
