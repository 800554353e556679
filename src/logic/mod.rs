//! Core non-UI logic: view controller, language switching and location updates.

pub mod language;
pub mod location;
pub mod view;

// Re-export public APIs so callers can use crate::logic::... directly
pub use language::{initial_language, load_language_content, populate_language_selector, set_language};
pub use location::{LocationFollowUp, apply_location_event};
pub use view::{ViewEffects, amplify_image, back, change_view, ensure_map, refresh_user_marker, show_description};
