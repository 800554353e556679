use crate::location::{AuthorizationOutcome, LocationError, LocationEvent, Position};
use crate::state::{AppState, Modal, View};

use super::view::refresh_user_marker;

/// Work the runtime must start after a location event was applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocationFollowUp {
    /// Run a one-shot position retrieval.
    pub fetch_fix: bool,
    /// Start the refresh ticker and position watch.
    pub start_session: bool,
}

/// What: Apply one message from the location tasks to the application state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `event`: Message received on the location channel
///
/// Output:
/// - Follow-up work for the runtime
///
/// Details:
/// - A grant asks for a one-shot fix and, while the map is on screen and no
///   session runs, starts the session.
/// - A denial opens the blocking notice; repeat denials offer the settings shortcut.
/// - Disabled services show the `location.deactivated` notice.
/// - A failed one-shot fix shows `location.error`; failed watch updates are only logged.
/// - Fixes, watch updates and ticks refresh the user marker.
pub fn apply_location_event(app: &mut AppState, event: LocationEvent) -> LocationFollowUp {
    let mut follow = LocationFollowUp::default();
    match event {
        LocationEvent::Authorization(Ok(status)) => match app.denials.on_status(status) {
            AuthorizationOutcome::Granted => {
                follow.fetch_fix = true;
                follow.start_session =
                    app.current_view == View::MapPage && !app.location_session_active;
            }
            AuthorizationOutcome::Denied { offer_settings } => {
                let loc = &app.page_text.location;
                app.modal = Modal::LocationDenied {
                    message: loc.denied.clone(),
                    offer_settings,
                    cancel_label: loc.cancel.clone(),
                    settings_label: loc.open_settings.clone(),
                };
            }
        },
        LocationEvent::Authorization(Err(e)) => {
            log_location_error("permission request failed", &e);
        }
        LocationEvent::ServicesEnabled(Ok(true)) => {}
        LocationEvent::ServicesEnabled(Ok(false)) => {
            tracing::info!("location services are disabled");
            app.modal = Modal::Alert {
                message: app.page_text.location.deactivated.clone(),
            };
        }
        LocationEvent::ServicesEnabled(Err(e)) => {
            log_location_error("location services check failed", &e);
        }
        LocationEvent::Fix(Ok(position)) => {
            let first = app.user_position.is_none();
            let coords = position.coords;
            store_position(app, position);
            if first && let Some(markers) = app.markers.as_mut() {
                markers.recenter(coords);
            }
            refresh_user_marker(app);
        }
        LocationEvent::Fix(Err(e)) => {
            log_location_error("error obtaining location", &e);
            app.modal = Modal::Alert {
                message: app.page_text.location.error.clone(),
            };
        }
        LocationEvent::Watch(Ok(position)) => {
            store_position(app, position);
            refresh_user_marker(app);
        }
        LocationEvent::Watch(Err(e)) => {
            log_location_error("watch update failed", &e);
        }
        LocationEvent::RefreshTick => {
            refresh_user_marker(app);
        }
    }
    follow
}

fn store_position(app: &mut AppState, position: Position) {
    tracing::debug!(
        lat = position.coords.lat,
        lng = position.coords.lng,
        accuracy = position.accuracy,
        "position update"
    );
    app.user_position = Some(position);
}

fn log_location_error(what: &str, e: &LocationError) {
    tracing::warn!(code = e.code.number(), message = %e.message, "{what}");
}
