use ratatui::Terminal;
use tokio::select;

use crate::events::{EventOutcome, handle_event};
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::LocationRuntime;

/// What: Process one message from whichever channel is ready.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels
/// - `location`: Provider and session owner
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Each message is applied to completion before the next is received, so
///   ticker and watch updates never interleave.
async fn process_channel_messages(
    app: &mut AppState,
    channels: &mut Channels,
    location: &mut LocationRuntime,
) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            match handle_event(&ev, app) {
                EventOutcome::Quit => true,
                EventOutcome::Effects(fx) => {
                    location.apply_view_effects(app, fx);
                    false
                }
                EventOutcome::OpenLocationSettings => {
                    location.open_location_settings();
                    false
                }
                EventOutcome::None => false,
            }
        }
        Some(ev) = channels.location_rx.recv() => {
            location.handle_location_event(app, ev);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, processing all channel messages and rendering the UI.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels
/// - `location`: Provider and session owner
///
/// Details:
/// - Exits when an event handler asks to quit; the session is stopped on the way out.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
    location: &mut LocationRuntime,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }

        if process_channel_messages(app, channels, location).await {
            break;
        }
    }
    location.stop_session(app);
}
