//! Geographic primitives shared by the map, location and data layers.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees (north positive).
    pub lat: f64,
    /// Longitude in degrees (east positive).
    pub lng: f64,
}

impl LatLng {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Axis-aligned geographic rectangle.
///
/// Built from any two opposite corners; the constructor normalises them so
/// callers may pass an upper-left/lower-right pair as well as south-west/
/// north-east.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLngBounds {
    south_west: LatLng,
    north_east: LatLng,
}

impl LatLngBounds {
    /// What: Build bounds from two opposite corners.
    ///
    /// Inputs:
    /// - `a`, `b`: Any two opposite corners of the rectangle
    ///
    /// Output:
    /// - Normalised bounds with `south_west <= north_east` on both axes
    #[must_use]
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// South-west (minimum) corner.
    #[must_use]
    pub const fn south_west(&self) -> LatLng {
        self.south_west
    }

    /// North-east (maximum) corner.
    #[must_use]
    pub const fn north_east(&self) -> LatLng {
        self.north_east
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Geometric centre of the rectangle.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// Longitude extent in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.north_east.lng - self.south_west.lng
    }

    /// Nearest point inside the rectangle to `point`.
    #[must_use]
    pub fn clamp(&self, point: LatLng) -> LatLng {
        LatLng::new(
            point.lat.clamp(self.south_west.lat, self.north_east.lat),
            point.lng.clamp(self.south_west.lng, self.north_east.lng),
        )
    }
}

/// Upper-left corner of the Abrantes box used as the map's max bounds.
pub const UPPER_LEFT_CORNER: LatLng = LatLng::new(39.510_042, -8.296_089);
/// Lower-right corner of the Abrantes box.
pub const LOWER_RIGHT_CORNER: LatLng = LatLng::new(39.401_459, -8.050_828);

/// Bounds inside which the user's live position marker is shown.
#[must_use]
pub fn abrantes_bounds() -> LatLngBounds {
    LatLngBounds::new(UPPER_LEFT_CORNER, LOWER_RIGHT_CORNER)
}
