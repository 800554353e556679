//! Core value types used by linotour state.

/// Pages the application can show. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing page with the introduction text.
    Home,
    /// Architect biography.
    Bio,
    /// Interactive map.
    MapPage,
    /// Landmark description with photo carousel.
    Desc,
    /// One carousel image, full screen.
    AmplifiedImage,
    /// Language selection.
    Settings,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Bio,
        Self::MapPage,
        Self::Desc,
        Self::AmplifiedImage,
        Self::Settings,
    ];

    /// Views reachable from the navigation bar, in display order.
    pub const TABS: [Self; 4] = [Self::Home, Self::Bio, Self::MapPage, Self::Settings];

    /// Stable identifier used in logs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Bio => "bio",
            Self::MapPage => "mapPage",
            Self::Desc => "desc",
            Self::AmplifiedImage => "amplifiedImage",
            Self::Settings => "settings",
        }
    }

    /// Detail/overlay views that have no navigation tab of their own.
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        matches!(self, Self::Desc | Self::AmplifiedImage)
    }
}
