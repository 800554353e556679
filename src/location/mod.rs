//! Geolocation tracking.
//!
//! A [`LocationProvider`] stands in for the device's location service. The
//! rest of the module builds on it:
//!
//! - [`auth`]: permission request outcome, with the first-denial/repeat-denial
//!   distinction of the notice shown to the user
//! - [`session`]: the scoped subscription (periodic refresh + position watch)
//!   that lives exactly as long as the map view is on screen
//! - [`provider`]: concrete providers backed by settings or a position file

pub mod auth;
pub mod provider;
pub mod session;

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;

use crate::geo::LatLng;

pub use auth::{AuthorizationOutcome, DenialTracker};
pub use provider::{FileProvider, StaticProvider};
pub use session::{LocationEvent, LocationSession};

/// A position fix as reported by the provider.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    /// Reported coordinates.
    pub coords: LatLng,
    /// Horizontal accuracy radius in metres.
    pub accuracy: f64,
    /// Altitude in metres, when known.
    pub altitude: Option<f64>,
    /// Heading in degrees clockwise from north, when known.
    pub heading: Option<f64>,
    /// Ground speed in m/s, when known.
    pub speed: Option<f64>,
    /// When the fix was taken.
    pub timestamp: DateTime<Utc>,
}

impl Position {
    /// Fix at `coords` taken now, with only accuracy known.
    #[must_use]
    pub fn at(coords: LatLng, accuracy: f64) -> Self {
        Self {
            coords,
            accuracy,
            altitude: None,
            heading: None,
            speed: None,
            timestamp: Utc::now(),
        }
    }
}

/// Failure category, numbered like the W3C geolocation error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationErrorCode {
    /// The user or system refused access.
    PermissionDenied = 1,
    /// No position could be determined.
    PositionUnavailable = 2,
    /// The request exceeded its timeout.
    Timeout = 3,
}

impl LocationErrorCode {
    /// Numeric code as reported to the user.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// Error record reported for a failed location request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("location error {} ({code:?}): {message}", .code.number())]
pub struct LocationError {
    /// Failure category.
    pub code: LocationErrorCode,
    /// Provider-supplied detail.
    pub message: String,
}

impl LocationError {
    /// Build an error with the given code and message.
    #[must_use]
    pub fn new(code: LocationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result of a permission request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Permanently granted.
    Granted,
    /// Granted while the app is in use.
    GrantedWhenInUse,
    /// Refused this time.
    Denied,
    /// Refused and the system will not ask again.
    DeniedAlways,
}

impl PermissionStatus {
    /// Whether the status allows reading the position.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted | Self::GrantedWhenInUse)
    }

    /// Parse the settings value (`granted`, `when_in_use`, `denied`, `denied_always`).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" | "always" => Some(Self::Granted),
            "when_in_use" | "granted_when_in_use" => Some(Self::GrantedWhenInUse),
            "denied" => Some(Self::Denied),
            "denied_always" | "never" => Some(Self::DeniedAlways),
            _ => None,
        }
    }
}

/// Timing parameters of a position request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchOptions {
    /// Age after which a cached fix is refreshed; also the watch polling period.
    pub maximum_age: Duration,
    /// Upper bound on a single position request.
    pub timeout: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            maximum_age: Duration::from_millis(1000),
            timeout: Duration::from_millis(2000),
        }
    }
}

/// Device location service.
///
/// Methods return boxed futures so providers can be shared as
/// `Arc<dyn LocationProvider>` between the event loop and session tasks.
pub trait LocationProvider: Send + Sync {
    /// Ask for permission to read the position.
    fn request_authorization(&self) -> BoxFuture<'_, Result<PermissionStatus, LocationError>>;

    /// Whether location services are switched on.
    fn is_location_enabled(&self) -> BoxFuture<'_, Result<bool, LocationError>>;

    /// Retrieve one position fix.
    fn current_position(&self) -> BoxFuture<'_, Result<Position, LocationError>>;

    /// Open the place where the user can change location settings.
    ///
    /// # Errors
    /// - Returns `Err` when the settings surface cannot be opened
    fn open_location_settings(&self) -> Result<(), LocationError>;
}

/// What: Retrieve one fix bounded by `options.timeout`.
///
/// Inputs:
/// - `provider`: Location service
/// - `options`: Timeout to apply
///
/// Output:
/// - The fix, or a `Timeout` error when the provider is too slow
///
/// # Errors
/// - Propagates provider errors; maps elapsed timeouts to `LocationErrorCode::Timeout`
pub async fn position_with_timeout(
    provider: &dyn LocationProvider,
    options: WatchOptions,
) -> Result<Position, LocationError> {
    tokio::time::timeout(options.timeout, provider.current_position())
        .await
        .unwrap_or_else(|_| {
            Err(LocationError::new(
                LocationErrorCode::Timeout,
                format!("no fix within {} ms", options.timeout.as_millis()),
            ))
        })
}
