//! Location pipeline against a file-backed provider: permission, first fix,
//! watch updates and the user marker leaving the Abrantes bounds.

mod common;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use linotour::app::LocationRuntime;
use linotour::events::{EventOutcome, handle_event};
use linotour::location::{FileProvider, LocationEvent, PermissionStatus};
use linotour::state::{Modal, View};
use tokio::sync::mpsc;

use common::{key, shipped_app};

/// Feed events into the runtime until `done` holds or the deadline passes.
async fn pump_until(
    rt: &mut LocationRuntime,
    app: &mut linotour::state::AppState,
    rx: &mut mpsc::UnboundedReceiver<LocationEvent>,
    done: impl Fn(&linotour::state::AppState) -> bool,
) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(3);
    while !done(app) {
        let Ok(Some(ev)) = tokio::time::timeout_at(deadline, rx.recv()).await else {
            return false;
        };
        rt.handle_location_event(app, ev);
    }
    true
}

#[tokio::test]
async fn file_position_tracks_marker_and_drops_it_outside_bounds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let position_file = dir.path().join("position");
    std::fs::write(&position_file, "39.4630, -8.1980, 8\n").expect("write position");
    let mut app = shipped_app(&dir.path().join("settings.conf"), None).await;
    app.refresh_interval = Duration::from_millis(50);
    app.watch_options.maximum_age = Duration::from_millis(50);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut rt = LocationRuntime::new(Arc::new(FileProvider::new(position_file.clone())), tx);

    let EventOutcome::Effects(fx) = handle_event(&key(KeyCode::Char('3')), &mut app) else {
        panic!("entering the map must request location");
    };
    rt.apply_view_effects(&mut app, fx);
    assert!(pump_until(&mut rt, &mut app, &mut rx, |a| a.marker_exists()).await);
    assert!(rt.session_running());

    std::fs::write(&position_file, "38.7223, -9.1393\n").expect("move to Lisbon");
    assert!(pump_until(&mut rt, &mut app, &mut rx, |a| !a.marker_exists()).await);
    assert!(
        app.user_position
            .as_ref()
            .is_some_and(|p| (p.coords.lat - 38.7223).abs() < 1e-9)
    );

    let EventOutcome::Effects(fx) = handle_event(&key(KeyCode::Char('1')), &mut app) else {
        panic!("leaving the map must stop the session");
    };
    rt.apply_view_effects(&mut app, fx);
    assert!(!rt.session_running());
    assert_eq!(app.current_view, View::Home);
}

#[tokio::test]
async fn repeated_denial_offers_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = shipped_app(&dir.path().join("settings.conf"), None).await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let position_file = dir.path().join("position");
    std::fs::write(&position_file, "39.4630, -8.1980\n").expect("write position");
    let provider = FileProvider::new(position_file).with_permission(PermissionStatus::Denied);
    let mut rt = LocationRuntime::new(Arc::new(provider), tx);

    for attempt in 0..2 {
        if let EventOutcome::Effects(fx) = handle_event(&key(KeyCode::Char('3')), &mut app) {
            rt.apply_view_effects(&mut app, fx);
        }
        assert!(pump_until(&mut rt, &mut app, &mut rx, |a| a.modal.is_open()).await);
        let Modal::LocationDenied { offer_settings, ref message, .. } = app.modal else {
            panic!("expected the denial notice, got {:?}", app.modal);
        };
        assert_eq!(offer_settings, attempt > 0);
        assert!(message.starts_with("Permissão de localização negada"));
        assert!(!rt.session_running());

        let _ = handle_event(&key(KeyCode::Esc), &mut app);
        let _ = handle_event(&key(KeyCode::Char('1')), &mut app);
        while rx.try_recv().is_ok() {}
    }
}
