use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::location::LocationEvent;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the event loop, the
///   terminal input thread and the location tasks.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown so the input thread exits promptly.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Location results from one-shot requests and the session tasks.
    pub location_tx: mpsc::UnboundedSender<LocationEvent>,
    /// Receiving side of `location_tx`.
    pub location_rx: mpsc::UnboundedReceiver<LocationEvent>,
}

impl Channels {
    /// Create every channel pair.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (location_tx, location_rx) = mpsc::unbounded_channel::<LocationEvent>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            location_tx,
            location_rx,
        }
    }
}
