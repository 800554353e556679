//! Modal notices shown over the current view.

/// Blocking notice state. Input goes to the modal while one is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal open.
    #[default]
    None,
    /// Error notice with a single dismiss action.
    Alert {
        /// Text to show.
        message: String,
    },
    /// Location permission denial notice.
    LocationDenied {
        /// Text to show.
        message: String,
        /// Whether the "open settings" shortcut is offered.
        offer_settings: bool,
        /// Dismiss button label.
        cancel_label: String,
        /// Settings button label.
        settings_label: String,
    },
}

impl Modal {
    /// Whether a modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
