use crate::data::DEFAULT_LANGUAGE;
use crate::i18n::{UiStrings, is_valid_locale_code};
use crate::map::render_description;
use crate::state::AppState;

/// What: Pick the language to start with.
///
/// Inputs:
/// - `cli`: `--lang` override, if given
/// - `stored`: `language` value from `settings.conf` (may be empty)
///
/// Output:
/// - `(language, persist)`: `persist` is true when the choice is not yet stored
///
/// Details:
/// - Malformed codes are ignored with a warning.
/// - With nothing usable the default `pt-PT` is chosen and must be persisted.
#[must_use]
pub fn initial_language(cli: Option<&str>, stored: &str) -> (String, bool) {
    let stored = stored.trim();
    if let Some(code) = cli.map(str::trim).filter(|c| !c.is_empty()) {
        if is_valid_locale_code(code) {
            return (code.to_string(), code != stored);
        }
        tracing::warn!(code, "ignoring malformed --lang value");
    }
    if is_valid_locale_code(stored) {
        return (stored.to_string(), false);
    }
    if !stored.is_empty() {
        tracing::warn!(code = stored, "ignoring malformed stored language");
    }
    (DEFAULT_LANGUAGE.to_string(), true)
}

/// What: Load the static page text for the active language.
///
/// Details:
/// - A language missing from the bundle leaves every text empty, matching a
///   failed document load.
pub fn load_language_content(app: &mut AppState) {
    if let Some(strings) = app.localization.get(&app.language) {
        app.page_text = strings.clone();
    } else {
        tracing::warn!(language = %app.language, "no localization for language");
        app.page_text = UiStrings::default();
    }
}

/// Fill the settings selector with every bundled language, current one selected.
pub fn populate_language_selector(app: &mut AppState) {
    app.language_options = app.localization.languages();
    app.language_cursor = app
        .language_options
        .iter()
        .position(|l| *l == app.language)
        .unwrap_or(0);
}

/// What: Switch the UI language.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `language`: Code chosen in the selector
///
/// Output:
/// - `true` when the language changed; `false` when the code is not in the bundle
///
/// Details:
/// - Persists the preference, reloads page text, relabels map popups and
///   re-renders an open description. The current view is unchanged.
/// - Nothing is refetched.
pub fn set_language(app: &mut AppState, language: &str) -> bool {
    if !app.localization.has_language(language) {
        tracing::warn!(language, current = %app.language, "language not in bundle; keeping current");
        return false;
    }
    if app.language == language {
        return true;
    }
    app.language = language.to_string();
    if let Some(path) = app.settings_path.as_deref()
        && let Err(e) = crate::theme::save_language_to(path, language)
    {
        tracing::warn!(error = %e, path = %path.display(), "failed to persist language");
    }
    load_language_content(app);

    let pois = app.pois.pois(&app.language);
    if let Some(markers) = app.markers.as_mut() {
        markers.relabel(pois);
    }
    if let Some(desc) = app.description.as_ref()
        && let Some(poi) = app.pois.get(&app.language, desc.poi_id)
    {
        let active = desc.carousel.active();
        let mut fresh = render_description(poi, &app.page_text);
        for _ in 0..active {
            fresh.carousel.next();
        }
        app.description = Some(fresh);
    }
    tracing::info!(language, "language changed");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizationBundle;
    use crate::state::View;

    fn strings(title: &str) -> UiStrings {
        UiStrings {
            title: title.to_string(),
            ..UiStrings::default()
        }
    }

    fn app() -> AppState {
        let mut app = AppState {
            localization: LocalizationBundle::from_entries([
                ("pt-PT".to_string(), strings("Início")),
                ("en-GB".to_string(), strings("Home")),
            ]),
            ..AppState::default()
        };
        load_language_content(&mut app);
        app
    }

    #[test]
    fn initial_language_prefers_cli_then_stored_then_default() {
        assert_eq!(initial_language(Some("en-GB"), "pt-PT"), ("en-GB".into(), true));
        assert_eq!(initial_language(None, "en-GB"), ("en-GB".into(), false));
        assert_eq!(initial_language(None, ""), ("pt-PT".into(), true));
        assert_eq!(initial_language(Some("english"), "xx"), ("pt-PT".into(), true));
    }

    #[test]
    fn switching_language_rerenders_text_and_keeps_view() {
        let mut app = app();
        app.current_view = View::Bio;
        assert_eq!(app.page_text.title, "Início");
        assert!(set_language(&mut app, "en-GB"));
        assert_eq!(app.page_text.title, "Home");
        assert_eq!(app.current_view, View::Bio);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let mut app = app();
        assert!(!set_language(&mut app, "fr-FR"));
        assert_eq!(app.language, "pt-PT");
        assert_eq!(app.page_text.title, "Início");
    }

    #[test]
    fn selector_lists_sorted_codes_with_current_selected() {
        let mut app = app();
        populate_language_selector(&mut app);
        assert_eq!(app.language_options, vec!["en-GB".to_string(), "pt-PT".to_string()]);
        assert_eq!(app.language_cursor, 1);
    }

    #[test]
    fn language_switch_is_persisted_to_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "# linotour\nlanguage = pt-PT\n").expect("write");
        let mut app = app();
        app.settings_path = Some(path.clone());
        assert!(set_language(&mut app, "en-GB"));
        let content = std::fs::read_to_string(&path).expect("read");
        assert!(content.contains("language = en-GB"));
        assert!(!content.contains("pt-PT"));
    }
}
