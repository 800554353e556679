//! Event handling layer for linotour's TUI.
//!
//! `handle_event` routes a terminal event to the open modal, the global
//! shortcuts or the handler of the current view. Handlers mutate `AppState`
//! directly and report anything the runtime has to do as an [`EventOutcome`].

use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind};

use crate::logic::ViewEffects;
use crate::state::{AppState, View};

mod global;
mod map;
mod modals;
mod mouse;
mod pages;

/// What the runtime must do after an event was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing beyond the state change.
    #[default]
    None,
    /// Leave the application.
    Quit,
    /// Carry out the side effects of a view change.
    Effects(ViewEffects),
    /// Open the location settings through the provider.
    OpenLocationSettings,
}

impl From<ViewEffects> for EventOutcome {
    fn from(fx: ViewEffects) -> Self {
        if fx == ViewEffects::default() {
            Self::None
        } else {
            Self::Effects(fx)
        }
    }
}

/// Dispatch a single terminal event and mutate the [`AppState`].
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> EventOutcome {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return EventOutcome::None;
            }
            handle_key(*ke, app)
        }
        CEvent::Mouse(me) => mouse::handle_mouse(*me, app),
        CEvent::Resize(w, h) => {
            tracing::debug!(width = w, height = h, "terminal resized");
            if let Some(markers) = app.markers.as_mut() {
                markers.viewport_mut().invalidate_size();
            }
            EventOutcome::None
        }
        _ => EventOutcome::None,
    }
}

fn handle_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    if app.modal.is_open() {
        return modals::handle_modal_key(ke, app);
    }
    if let Some(outcome) = global::handle_global_key(ke, app) {
        return outcome;
    }
    match app.current_view {
        View::MapPage => map::handle_map_key(ke, app),
        View::Desc => pages::handle_desc_key(ke, app),
        View::AmplifiedImage => pages::handle_amplified_key(ke, app),
        View::Settings => pages::handle_settings_key(ke, app),
        View::Home | View::Bio => pages::handle_text_page_key(ke, app),
    }
}

#[cfg(test)]
pub(crate) fn key(code: crossterm::event::KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, crossterm::event::KeyModifiers::NONE))
}
