//! Mouse wheel handling: zoom on the map, scroll on text pages.

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::state::{AppState, View};

use super::EventOutcome;

pub(super) fn handle_mouse(me: MouseEvent, app: &mut AppState) -> EventOutcome {
    if app.modal.is_open() {
        return EventOutcome::None;
    }
    let up = match me.kind {
        MouseEventKind::ScrollUp => true,
        MouseEventKind::ScrollDown => false,
        _ => return EventOutcome::None,
    };
    match app.current_view {
        View::MapPage => {
            if let Some(markers) = app.markers.as_mut() {
                if up {
                    markers.viewport_mut().zoom_in();
                } else {
                    markers.viewport_mut().zoom_out();
                }
            }
        }
        View::Home | View::Bio | View::Desc => {
            app.page_scroll = if up {
                app.page_scroll.saturating_sub(1)
            } else {
                app.page_scroll.saturating_add(1)
            };
        }
        View::AmplifiedImage | View::Settings => {}
    }
    EventOutcome::None
}
