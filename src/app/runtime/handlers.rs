use std::sync::Arc;

use tokio::sync::mpsc;

use crate::location::{LocationEvent, LocationProvider, LocationSession};
use crate::logic::{LocationFollowUp, ViewEffects, apply_location_event};
use crate::state::AppState;

use super::background::{spawn_authorization_request, spawn_fix, spawn_services_check};

/// Owns the location provider and the running session on behalf of the event loop.
///
/// Controller functions only report what they need (`ViewEffects`,
/// `LocationFollowUp`); this type turns those into spawned requests and keeps
/// `AppState::location_session_active` in step with the session handle.
pub struct LocationRuntime {
    provider: Arc<dyn LocationProvider>,
    session: Option<LocationSession>,
    tx: mpsc::UnboundedSender<LocationEvent>,
}

impl LocationRuntime {
    /// Runtime around `provider`, delivering results on `tx`.
    #[must_use]
    pub fn new(provider: Arc<dyn LocationProvider>, tx: mpsc::UnboundedSender<LocationEvent>) -> Self {
        Self {
            provider,
            session: None,
            tx,
        }
    }

    /// What: Carry out the side effects of a view change.
    ///
    /// Inputs:
    /// - `app`: Application state (session flag is updated)
    /// - `effects`: Flags returned by the view controller
    pub fn apply_view_effects(&mut self, app: &mut AppState, effects: ViewEffects) {
        if effects.stop_location_session {
            self.stop_session(app);
        }
        if effects.request_permission {
            spawn_authorization_request(Arc::clone(&self.provider), self.tx.clone());
        }
        if effects.check_location_enabled {
            spawn_services_check(Arc::clone(&self.provider), self.tx.clone());
        }
    }

    /// What: Apply one location message and start whatever it asks for.
    pub fn handle_location_event(&mut self, app: &mut AppState, event: LocationEvent) {
        let follow = apply_location_event(app, event);
        self.apply_follow_up(app, follow);
    }

    /// Start a one-shot fix and/or the session as requested.
    pub fn apply_follow_up(&mut self, app: &mut AppState, follow: LocationFollowUp) {
        if follow.fetch_fix {
            spawn_fix(Arc::clone(&self.provider), app.watch_options, self.tx.clone());
        }
        if follow.start_session && self.session.is_none() {
            self.session = Some(LocationSession::start(
                Arc::clone(&self.provider),
                app.refresh_interval,
                app.watch_options,
                self.tx.clone(),
            ));
            app.location_session_active = true;
        }
    }

    /// Drop the running session, if any.
    pub fn stop_session(&mut self, app: &mut AppState) {
        if let Some(session) = self.session.take() {
            session.stop();
        }
        app.location_session_active = false;
    }

    /// Whether a session is currently running.
    #[must_use]
    pub const fn session_running(&self) -> bool {
        self.session.is_some()
    }

    /// Open the location settings through the provider.
    pub fn open_location_settings(&self) {
        if let Err(e) = self.provider.open_location_settings() {
            tracing::warn!(code = e.code.number(), message = %e.message, "cannot open location settings");
        }
    }
}
