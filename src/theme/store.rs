use std::sync::{OnceLock, RwLock};

use super::types::Theme;

/// Global palette, installed once settings are loaded.
static THEME_STORE: OnceLock<RwLock<Theme>> = OnceLock::new();

/// Return the application's theme palette; the built-in palette until one is installed.
pub fn theme() -> Theme {
    let lock = THEME_STORE.get_or_init(|| RwLock::new(Theme::default()));
    lock.read().map_or_else(|poisoned| *poisoned.into_inner(), |t| *t)
}

/// Replace the palette used by rendering code.
pub fn set_theme(theme: Theme) {
    let lock = THEME_STORE.get_or_init(|| RwLock::new(Theme::default()));
    match lock.write() {
        Ok(mut guard) => *guard = theme,
        Err(poisoned) => *poisoned.into_inner() = theme,
    }
}
