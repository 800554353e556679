//! Configuration for linotour: settings file, paths and colour palette.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Settings skeleton and persistence.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Global palette store.
mod store;
/// Theme and settings type definitions.
mod types;

pub use config::{SETTINGS_SKELETON_CONTENT, save_language_to};
pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{load_settings_from, parse_settings};
pub use store::{set_theme, theme};
pub use types::{ProviderKind, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that mutate `HOME`.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
