//! Global shortcuts: quitting and switching navigation tabs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::change_view;
use crate::state::{AppState, View};

use super::EventOutcome;

/// What: Handle keys that work on every view.
///
/// Output:
/// - `Some(outcome)` when the key was consumed; `None` to fall through to the view handler
///
/// Details:
/// - `q` and `Ctrl+C` quit; `1`-`4` jump to a tab; `Tab`/`Shift+Tab` cycle tabs.
/// - From a detail view, tab cycling starts at the map tab.
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<EventOutcome> {
    match ke.code {
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(EventOutcome::Quit)
        }
        KeyCode::Char('q') => Some(EventOutcome::Quit),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            let target = View::TABS[idx];
            Some(change_view(app, target).into())
        }
        KeyCode::Tab | KeyCode::BackTab => {
            let current = app.highlighted_tab.unwrap_or(View::MapPage);
            let pos = View::TABS.iter().position(|v| *v == current).unwrap_or(0);
            let n = View::TABS.len();
            let next = if ke.code == KeyCode::Tab {
                (pos + 1) % n
            } else {
                (pos + n - 1) % n
            };
            Some(change_view(app, View::TABS[next]).into())
        }
        _ => None,
    }
}
