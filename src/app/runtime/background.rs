use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::location::{LocationEvent, LocationProvider, WatchOptions, position_with_timeout};

/// What: Spawn the terminal input thread.
///
/// Inputs:
/// - `headless`: Skip the thread entirely (tests)
/// - `event_tx`: Channel for terminal events
/// - `cancelled`: Set on shutdown; the thread exits at its next poll
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed without a key press.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        // transient read errors are skipped
                        tracing::debug!(error = %e, "[Runtime] terminal read failed");
                    }
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// Ask the provider for permission; the answer arrives as `LocationEvent::Authorization`.
pub fn spawn_authorization_request(
    provider: Arc<dyn LocationProvider>,
    tx: mpsc::UnboundedSender<LocationEvent>,
) {
    tokio::spawn(async move {
        let res = provider.request_authorization().await;
        let _ = tx.send(LocationEvent::Authorization(res));
    });
}

/// Ask whether location services are on; answered as `LocationEvent::ServicesEnabled`.
pub fn spawn_services_check(
    provider: Arc<dyn LocationProvider>,
    tx: mpsc::UnboundedSender<LocationEvent>,
) {
    tokio::spawn(async move {
        let res = provider.is_location_enabled().await;
        let _ = tx.send(LocationEvent::ServicesEnabled(res));
    });
}

/// One-shot position retrieval; answered as `LocationEvent::Fix`.
pub fn spawn_fix(
    provider: Arc<dyn LocationProvider>,
    options: WatchOptions,
    tx: mpsc::UnboundedSender<LocationEvent>,
) {
    tokio::spawn(async move {
        let res = position_with_timeout(provider.as_ref(), options).await;
        let _ = tx.send(LocationEvent::Fix(res));
    });
}
