//! Fixed walking-route geometry.

use crate::geo::LatLng;

/// Colour of a route segment; also names the marker icon family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteColor {
    /// Yellow route segment.
    Yellow,
    /// Green route segment.
    Green,
}

/// A drawn route segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// Stroke colour.
    pub color: RouteColor,
    /// Vertices in drawing order.
    pub points: Vec<LatLng>,
}

/// Where the map recentres when the itinerary is shown.
pub const ITINERARY_CENTER: LatLng = LatLng::new(39.463_001, -8.198_164);
/// Zoom level used when the itinerary is shown.
pub const ITINERARY_ZOOM: u8 = 16;

const YELLOW_ROUTE: [(f64, f64); 16] = [
    (39.463_470, -8.201_936),
    (39.463_956, -8.200_545),
    (39.463_898, -8.200_425),
    (39.464_009, -8.199_658),
    (39.464_018, -8.199_274),
    (39.463_518, -8.198_971),
    (39.463_456, -8.198_977),
    (39.463_099, -8.198_291),
    (39.463_211, -8.198_090),
    (39.462_999, -8.198_292),
    (39.462_913, -8.197_889),
    (39.462_590, -8.198_416),
    (39.462_262, -8.198_719),
    (39.461_829, -8.199_644),
    (39.461_252, -8.199_425),
    (39.461_363, -8.198_468),
];

const GREEN_ROUTE: [(f64, f64); 10] = [
    (39.461_363, -8.198_468),
    (39.461_824, -8.198_045),
    (39.461_453, -8.197_270),
    (39.461_805, -8.196_812),
    (39.462_072, -8.196_206),
    (39.462_577, -8.196_332),
    (39.462_625, -8.196_112),
    (39.462_594, -8.196_299),
    (39.463_453, -8.196_723),
    (39.464_861, -8.197_632),
];

fn polyline(color: RouteColor, pts: &[(f64, f64)]) -> Polyline {
    Polyline {
        color,
        points: pts.iter().map(|&(lat, lng)| LatLng::new(lat, lng)).collect(),
    }
}

/// The two route segments, yellow first.
#[must_use]
pub fn route_polylines() -> Vec<Polyline> {
    vec![
        polyline(RouteColor::Yellow, &YELLOW_ROUTE),
        polyline(RouteColor::Green, &GREEN_ROUTE),
    ]
}
