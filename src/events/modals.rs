//! Key handling while a modal notice is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

use super::EventOutcome;

/// What: Handle a key while a modal is open.
///
/// Output:
/// - `OpenLocationSettings` when the settings shortcut is accepted; `None` otherwise
///
/// Details:
/// - `Enter`/`Esc` dismiss any modal.
/// - `s` opens the location settings, but only when the denial notice offers it.
/// - Every other key is swallowed so the view underneath does not react.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    match ke.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.modal = Modal::None;
            EventOutcome::None
        }
        KeyCode::Char('s' | 'S') => {
            if let Modal::LocationDenied {
                offer_settings: true,
                ..
            } = app.modal
            {
                app.modal = Modal::None;
                EventOutcome::OpenLocationSettings
            } else {
                EventOutcome::None
            }
        }
        _ => EventOutcome::None,
    }
}
