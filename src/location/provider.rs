//! Location providers for terminals without a positioning device.
//!
//! [`StaticProvider`] reports a fixed position from settings; [`FileProvider`]
//! re-reads a small text file (`lat,lng[,accuracy]`) on every request so an
//! external GPS bridge or a test script can move the user around.

use std::path::PathBuf;

use futures::future::BoxFuture;

use super::{LocationError, LocationErrorCode, LocationProvider, PermissionStatus, Position};
use crate::geo::LatLng;

/// Default accuracy reported when the source gives none, in metres.
const DEFAULT_ACCURACY_M: f64 = 25.0;

fn open_settings_file(settings_path: Option<&PathBuf>) -> Result<(), LocationError> {
    let Some(path) = settings_path else {
        return Err(LocationError::new(
            LocationErrorCode::PositionUnavailable,
            "no settings file to open",
        ));
    };
    tracing::info!(path = %path.display(), "opening location settings");
    crate::util::open_file(path);
    Ok(())
}

/// Reports one fixed position.
#[derive(Clone, Debug)]
pub struct StaticProvider {
    coords: LatLng,
    accuracy: f64,
    permission: PermissionStatus,
    enabled: bool,
    settings_path: Option<PathBuf>,
}

impl StaticProvider {
    /// Provider always answering with `coords`, permission granted and services on.
    #[must_use]
    pub const fn new(coords: LatLng) -> Self {
        Self {
            coords,
            accuracy: DEFAULT_ACCURACY_M,
            permission: PermissionStatus::Granted,
            enabled: true,
            settings_path: None,
        }
    }

    /// Answer permission requests with `permission`.
    #[must_use]
    pub const fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }

    /// Report location services as switched on or off.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// File opened by [`LocationProvider::open_location_settings`].
    #[must_use]
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }
}

impl LocationProvider for StaticProvider {
    fn request_authorization(&self) -> BoxFuture<'_, Result<PermissionStatus, LocationError>> {
        Box::pin(async move { Ok(self.permission) })
    }

    fn is_location_enabled(&self) -> BoxFuture<'_, Result<bool, LocationError>> {
        Box::pin(async move { Ok(self.enabled) })
    }

    fn current_position(&self) -> BoxFuture<'_, Result<Position, LocationError>> {
        Box::pin(async move {
            if !self.permission.is_granted() {
                return Err(LocationError::new(
                    LocationErrorCode::PermissionDenied,
                    "location permission not granted",
                ));
            }
            if !self.enabled {
                return Err(LocationError::new(
                    LocationErrorCode::PositionUnavailable,
                    "location services are disabled",
                ));
            }
            Ok(Position::at(self.coords, self.accuracy))
        })
    }

    fn open_location_settings(&self) -> Result<(), LocationError> {
        open_settings_file(self.settings_path.as_ref())
    }
}

/// Reads the position from a text file on every request.
#[derive(Clone, Debug)]
pub struct FileProvider {
    path: PathBuf,
    permission: PermissionStatus,
    settings_path: Option<PathBuf>,
}

impl FileProvider {
    /// Provider reading `path`, permission granted.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            permission: PermissionStatus::Granted,
            settings_path: None,
        }
    }

    /// Answer permission requests with `permission`.
    #[must_use]
    pub const fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }

    /// File opened by [`LocationProvider::open_location_settings`].
    #[must_use]
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }
}

/// What: Parse a `lat,lng[,accuracy]` position line.
///
/// Inputs:
/// - `content`: File content; the first non-empty, non-comment line is used
///
/// Output:
/// - `Some(Position)` when both coordinates parse, `None` otherwise
///
/// Details:
/// - Accepts commas or whitespace as separators
/// - Lines starting with `#` are skipped
#[must_use]
pub fn parse_position_line(content: &str) -> Option<Position> {
    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))?;
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let lat = fields.next()?.parse::<f64>().ok()?;
    let lng = fields.next()?.parse::<f64>().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    let accuracy = fields
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_ACCURACY_M);
    Some(Position::at(LatLng::new(lat, lng), accuracy))
}

impl LocationProvider for FileProvider {
    fn request_authorization(&self) -> BoxFuture<'_, Result<PermissionStatus, LocationError>> {
        Box::pin(async move { Ok(self.permission) })
    }

    fn is_location_enabled(&self) -> BoxFuture<'_, Result<bool, LocationError>> {
        Box::pin(async move { Ok(tokio::fs::try_exists(&self.path).await.unwrap_or(false)) })
    }

    fn current_position(&self) -> BoxFuture<'_, Result<Position, LocationError>> {
        Box::pin(async move {
            if !self.permission.is_granted() {
                return Err(LocationError::new(
                    LocationErrorCode::PermissionDenied,
                    "location permission not granted",
                ));
            }
            let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                LocationError::new(
                    LocationErrorCode::PositionUnavailable,
                    format!("cannot read {}: {e}", self.path.display()),
                )
            })?;
            parse_position_line(&content).ok_or_else(|| {
                LocationError::new(
                    LocationErrorCode::PositionUnavailable,
                    format!("no valid position in {}", self.path.display()),
                )
            })
        })
    }

    fn open_location_settings(&self) -> Result<(), LocationError> {
        open_settings_file(self.settings_path.as_ref())
    }
}
