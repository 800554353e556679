//! Key handling for the text pages, the description, the enlarged image and settings.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{amplify_image, back, set_language};
use crate::state::AppState;

use super::EventOutcome;

/// Lines moved by `PageUp`/`PageDown`.
const PAGE_STEP: u16 = 10;

/// Scroll the current page; returns `true` when the key was a scroll key.
fn scroll(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.page_scroll = app.page_scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => app.page_scroll = app.page_scroll.saturating_add(1),
        KeyCode::PageUp => app.page_scroll = app.page_scroll.saturating_sub(PAGE_STEP),
        KeyCode::PageDown => app.page_scroll = app.page_scroll.saturating_add(PAGE_STEP),
        KeyCode::Home => app.page_scroll = 0,
        _ => return false,
    }
    true
}

/// Home and biography pages only scroll.
pub(super) fn handle_text_page_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    let _ = scroll(ke, app);
    EventOutcome::None
}

/// What: Handle a key on the description page.
///
/// Details:
/// - `Left`/`Right` move the carousel; `Enter` enlarges the active image.
/// - `Esc`/`Backspace` return to the map.
pub(super) fn handle_desc_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    if scroll(ke, app) {
        return EventOutcome::None;
    }
    match ke.code {
        KeyCode::Left => {
            if let Some(desc) = app.description.as_mut() {
                desc.carousel.previous();
            }
        }
        KeyCode::Right => {
            if let Some(desc) = app.description.as_mut() {
                desc.carousel.next();
            }
        }
        KeyCode::Enter => {
            let Some((poi_id, index)) = app
                .description
                .as_ref()
                .filter(|d| !d.carousel.images().is_empty())
                .map(|d| (d.poi_id, d.carousel.active()))
            else {
                return EventOutcome::None;
            };
            return match amplify_image(app, poi_id, index) {
                Ok(fx) => fx.into(),
                Err(e) => {
                    tracing::warn!(error = %e, "cannot enlarge image");
                    EventOutcome::None
                }
            };
        }
        KeyCode::Esc | KeyCode::Backspace => return back(app).into(),
        _ => {}
    }
    EventOutcome::None
}

/// What: Handle a key on the enlarged image.
///
/// Details:
/// - `o` hands the image reference to the system opener.
/// - `Esc`/`Backspace` return to the description.
pub(super) fn handle_amplified_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    match ke.code {
        KeyCode::Char('o') => {
            if let Some(amp) = app.amplified.as_ref() {
                crate::util::open_url(&amp.image);
            }
            EventOutcome::None
        }
        KeyCode::Esc | KeyCode::Backspace => back(app).into(),
        _ => EventOutcome::None,
    }
}

/// What: Handle a key on the settings page.
///
/// Details:
/// - `Up`/`Down` move the language cursor; `Enter` applies the highlighted language.
pub(super) fn handle_settings_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    let n = app.language_options.len();
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') if n > 0 => {
            app.language_cursor = app.language_cursor.checked_sub(1).unwrap_or(n - 1);
        }
        KeyCode::Down | KeyCode::Char('j') if n > 0 => {
            app.language_cursor = (app.language_cursor + 1) % n;
        }
        KeyCode::Enter => {
            if let Some(lang) = app.language_options.get(app.language_cursor).cloned() {
                let _ = set_language(app, &lang);
            }
        }
        _ => {}
    }
    EventOutcome::None
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::data::{Poi, PoiDocument, PoiStore};
    use crate::events::{EventOutcome, handle_event, key};
    use crate::geo::LatLng;
    use crate::i18n::{LocalizationBundle, UiStrings};
    use crate::logic::{change_view, show_description};
    use crate::state::{AppState, View};

    fn app() -> AppState {
        let poi = Poi {
            id: 7,
            title: "Casa dos Azulejos".into(),
            coords: LatLng::new(39.463, -8.198),
            info: String::new(),
            year: String::new(),
            location: String::new(),
            kind: String::new(),
            images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        };
        AppState {
            pois: PoiStore::from_document(PoiDocument::Shared(vec![poi])),
            ..AppState::default()
        }
    }

    #[test]
    fn carousel_then_enlarge_then_back() {
        let mut app = app();
        let _ = change_view(&mut app, View::MapPage);
        let _ = show_description(&mut app, 7).expect("known id");
        let _ = handle_event(&key(KeyCode::Left), &mut app);
        assert_eq!(app.description.as_ref().map(|d| d.carousel.active()), Some(2));
        let _ = handle_event(&key(KeyCode::Enter), &mut app);
        assert_eq!(app.current_view, View::AmplifiedImage);
        assert_eq!(app.amplified.as_ref().map(|a| a.index), Some(2));
        let _ = handle_event(&key(KeyCode::Esc), &mut app);
        assert_eq!(app.current_view, View::Desc);
        let out = handle_event(&key(KeyCode::Backspace), &mut app);
        assert_eq!(app.current_view, View::MapPage);
        assert!(matches!(out, EventOutcome::Effects(fx) if fx.request_permission));
    }

    #[test]
    fn text_pages_scroll_without_underflow() {
        let mut app = app();
        let _ = handle_event(&key(KeyCode::Up), &mut app);
        assert_eq!(app.page_scroll, 0);
        let _ = handle_event(&key(KeyCode::PageDown), &mut app);
        let _ = handle_event(&key(KeyCode::Down), &mut app);
        assert_eq!(app.page_scroll, 11);
        let _ = handle_event(&key(KeyCode::Char('2')), &mut app);
        assert_eq!(app.page_scroll, 0);
    }

    #[test]
    fn settings_cursor_wraps_and_enter_applies() {
        let mut app = app();
        app.localization = LocalizationBundle::from_entries(vec![
            ("en-GB".to_string(), UiStrings::default()),
            ("pt-PT".to_string(), UiStrings::default()),
        ]);
        app.language = "pt-PT".into();
        let _ = change_view(&mut app, View::Settings);
        assert_eq!(app.language_cursor, 1);
        let _ = handle_event(&key(KeyCode::Down), &mut app);
        assert_eq!(app.language_cursor, 0);
        let _ = handle_event(&key(KeyCode::Enter), &mut app);
        assert_eq!(app.language, "en-GB");
        assert_eq!(app.current_view, View::Settings);
    }
}
