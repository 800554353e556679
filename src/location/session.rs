//! Scoped location subscription tied to the map view.
//!
//! While the map is on screen two tasks feed the event loop: a fixed-interval
//! refresh ticker and a position watch. Both only send messages; the event
//! loop applies each one to `AppState` in turn. Dropping the session aborts
//! both tasks, so nothing keeps polling after the user leaves the map.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{LocationError, LocationProvider, PermissionStatus, Position, WatchOptions};

/// Default period of the user-marker refresh.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Message delivered from location tasks to the event loop.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationEvent {
    /// Permission request resolved.
    Authorization(Result<PermissionStatus, LocationError>),
    /// Location-services check resolved.
    ServicesEnabled(Result<bool, LocationError>),
    /// One-shot retrieval resolved.
    Fix(Result<Position, LocationError>),
    /// Watch delivered an update.
    Watch(Result<Position, LocationError>),
    /// Periodic marker refresh is due.
    RefreshTick,
}

/// Running ticker + watch pair. Stops when dropped.
pub struct LocationSession {
    ticker: JoinHandle<()>,
    watch: JoinHandle<()>,
}

impl LocationSession {
    /// What: Start the refresh ticker and the position watch.
    ///
    /// Inputs:
    /// - `provider`: Location service polled by the watch
    /// - `refresh_interval`: Period of `RefreshTick` messages
    /// - `options`: Watch polling period (`maximum_age`) and per-request timeout
    /// - `tx`: Event loop channel
    ///
    /// Output:
    /// - Session handle; drop it (or call [`stop`](Self::stop)) to end both tasks
    ///
    /// Details:
    /// - The first tick fires one full interval after start.
    /// - Each task exits on its own once the receiver is gone.
    #[must_use]
    pub fn start(
        provider: Arc<dyn LocationProvider>,
        refresh_interval: Duration,
        options: WatchOptions,
        tx: mpsc::UnboundedSender<LocationEvent>,
    ) -> Self {
        tracing::debug!(
            refresh_ms = refresh_interval.as_millis(),
            max_age_ms = options.maximum_age.as_millis(),
            timeout_ms = options.timeout.as_millis(),
            "[Location] session started"
        );
        let tick_tx = tx.clone();
        let ticker = tokio::spawn(async move {
            let mut iv = tokio::time::interval(refresh_interval);
            iv.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval() yields immediately on the first tick
            iv.tick().await;
            loop {
                iv.tick().await;
                if tick_tx.send(LocationEvent::RefreshTick).is_err() {
                    break;
                }
            }
        });
        let watch = tokio::spawn(async move {
            loop {
                let res = super::position_with_timeout(provider.as_ref(), options).await;
                if tx.send(LocationEvent::Watch(res)).is_err() {
                    break;
                }
                tokio::time::sleep(options.maximum_age).await;
            }
        });
        Self { ticker, watch }
    }

    /// Stop both tasks.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for LocationSession {
    fn drop(&mut self) {
        self.ticker.abort();
        self.watch.abort();
        tracing::debug!("[Location] session stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;
    use crate::location::StaticProvider;

    fn opts() -> WatchOptions {
        WatchOptions {
            maximum_age: Duration::from_millis(10),
            timeout: Duration::from_millis(200),
        }
    }

    #[tokio::test]
    async fn session_delivers_ticks_and_watch_updates() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let provider = Arc::new(StaticProvider::new(LatLng::new(39.46, -8.20)));
        let _session = LocationSession::start(provider, Duration::from_millis(20), opts(), tx);

        let mut saw_tick = false;
        let mut saw_watch = false;
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while !(saw_tick && saw_watch) {
            let ev = tokio::time::timeout_at(deadline, rx.recv())
                .await
                .expect("events before deadline")
                .expect("channel open");
            match ev {
                LocationEvent::RefreshTick => saw_tick = true,
                LocationEvent::Watch(Ok(p)) => {
                    assert_eq!(p.coords, LatLng::new(39.46, -8.20));
                    saw_watch = true;
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn dropping_the_session_closes_the_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let provider = Arc::new(StaticProvider::new(LatLng::new(39.46, -8.20)));
        let session = LocationSession::start(provider, Duration::from_millis(20), opts(), tx);
        let _ = rx.recv().await;
        session.stop();

        // Once both aborted tasks drop their senders the channel drains to None.
        tokio::time::timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await
        .expect("channel closes after stop");
    }
}
