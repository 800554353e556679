//! Key handling for the map page.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::show_description;
use crate::map::PopupAction;
use crate::state::AppState;

use super::EventOutcome;

/// Fraction of the visible span moved by one arrow key.
const PAN_STEP: f64 = 0.25;

/// What: Handle a key on the map page.
///
/// Details:
/// - Arrows pan, `+`/`-` zoom, `n`/`p` walk the landmark pins.
/// - `Enter` opens the selected pin's popup, a second `Enter` opens its description.
/// - `i` toggles the itinerary and `c` recentres on the user.
pub(super) fn handle_map_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    let Some(markers) = app.markers.as_mut() else {
        return EventOutcome::None;
    };
    match ke.code {
        KeyCode::Up => markers.viewport_mut().pan(PAN_STEP, 0.0),
        KeyCode::Down => markers.viewport_mut().pan(-PAN_STEP, 0.0),
        KeyCode::Left => markers.viewport_mut().pan(0.0, -PAN_STEP),
        KeyCode::Right => markers.viewport_mut().pan(0.0, PAN_STEP),
        KeyCode::Char('+' | '=') => markers.viewport_mut().zoom_in(),
        KeyCode::Char('-') => markers.viewport_mut().zoom_out(),
        KeyCode::Char('n') => markers.select_next(true),
        KeyCode::Char('p') => markers.select_next(false),
        KeyCode::Char('i') => {
            let shown = markers.toggle_itinerary();
            tracing::debug!(itinerary = shown, "itinerary toggled");
        }
        KeyCode::Char('c') => {
            if let Some(pos) = app.user_position.as_ref() {
                markers.recenter(pos.coords);
            }
        }
        KeyCode::Esc => markers.close_popup(),
        KeyCode::Enter => {
            if let Some(PopupAction::ShowDescription(id)) = markers.activate_selected() {
                return match show_description(app, id) {
                    Ok(fx) => fx.into(),
                    Err(e) => {
                        tracing::warn!(error = %e, "popup action failed");
                        EventOutcome::None
                    }
                };
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
    use crate::logic::change_view;
    use crate::state::{AppState, View};

    fn app_on_map() -> AppState {
        let pois = (1..=3)
            .map(|id| Poi {
                id,
                title: format!("Casa {id}"),
                coords: LatLng::new(39.463, -8.198),
                info: String::new(),
                year: String::new(),
                location: String::new(),
                kind: String::new(),
                images: vec!["x.jpg".into()],
            })
            .collect();
        let mut app = AppState {
            pois: PoiStore::from_document(PoiDocument::Shared(pois)),
            ..AppState::default()
        };
        let _ = change_view(&mut app, View::MapPage);
        app
    }

    #[test]
    fn select_then_double_enter_opens_description() {
        let mut app = app_on_map();
        let _ = handle_event(&key(KeyCode::Char('n')), &mut app);
        assert_eq!(handle_event(&key(KeyCode::Enter), &mut app), EventOutcome::None);
        assert!(app.markers.as_ref().is_some_and(|m| m.popup_open()));
        let _ = handle_event(&key(KeyCode::Enter), &mut app);
        assert_eq!(app.current_view, View::Desc);
        assert!(app.description.is_some());
    }

    #[test]
    fn zoom_keys_stay_in_range() {
        let mut app = app_on_map();
        for _ in 0..20 {
            let _ = handle_event(&key(KeyCode::Char('+')), &mut app);
        }
        assert_eq!(app.markers.as_ref().map(|m| m.viewport().zoom()), Some(18));
        for _ in 0..20 {
            let _ = handle_event(&key(KeyCode::Char('-')), &mut app);
        }
        assert_eq!(app.markers.as_ref().map(|m| m.viewport().zoom()), Some(12));
    }

    #[test]
    fn itinerary_toggle_key() {
        let mut app = app_on_map();
        let _ = handle_event(&key(KeyCode::Char('i')), &mut app);
        assert!(app.markers.as_ref().is_some_and(|m| m.itinerary_shown()));
        let _ = handle_event(&key(KeyCode::Char('i')), &mut app);
        assert!(app.markers.as_ref().is_some_and(|m| !m.itinerary_shown()));
    }
}
