//! Map viewport: centre, zoom and the cached projection for the drawing area.

use crate::geo::{LatLng, LatLngBounds};

/// Furthest zoom-out allowed.
pub const MIN_ZOOM: u8 = 12;
/// Furthest zoom-in allowed.
pub const MAX_ZOOM: u8 = 18;
/// Terminal columns treated as one 256px web-map tile.
const CELLS_PER_TILE: f64 = 32.0;
/// Terminal cells are roughly twice as tall as wide.
const CELL_ASPECT: f64 = 2.0;

/// Visible map window.
///
/// The projection (`x_bounds`/`y_bounds`) is cached for the last known
/// drawing-area size. A map that was laid out while hidden keeps a stale
/// cache until [`invalidate_size`](Self::invalidate_size) is followed by
/// [`sync_size`](Self::sync_size) with the real area.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    center: LatLng,
    zoom: u8,
    max_bounds: LatLngBounds,
    size: (u16, u16),
    size_stale: bool,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl Viewport {
    /// What: Create a viewport constrained to `max_bounds`.
    ///
    /// Inputs:
    /// - `center`: Initial centre (clamped into `max_bounds`)
    /// - `zoom`: Initial zoom (clamped into `MIN_ZOOM..=MAX_ZOOM`)
    /// - `max_bounds`: Area the centre may never leave
    ///
    /// Output:
    /// - Viewport with a zero-size projection that needs a first `sync_size`
    #[must_use]
    pub fn new(center: LatLng, zoom: u8, max_bounds: LatLngBounds) -> Self {
        let mut vp = Self {
            center: max_bounds.clamp(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            max_bounds,
            size: (0, 0),
            size_stale: true,
            x_bounds: [center.lng, center.lng],
            y_bounds: [center.lat, center.lat],
        };
        vp.recompute();
        vp
    }

    /// Current centre.
    #[must_use]
    pub const fn center(&self) -> LatLng {
        self.center
    }

    /// Current zoom level.
    #[must_use]
    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Longitude range of the drawing area, `[west, east]`.
    #[must_use]
    pub const fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    /// Latitude range of the drawing area, `[south, north]`.
    #[must_use]
    pub const fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    /// Whether a resize recalculation is pending.
    #[must_use]
    pub const fn size_stale(&self) -> bool {
        self.size_stale
    }

    /// Move to `center` at `zoom`, clamping both.
    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = self.max_bounds.clamp(center);
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.recompute();
    }

    /// Mark the cached projection as stale; the next `sync_size` recomputes it.
    pub const fn invalidate_size(&mut self) {
        self.size_stale = true;
    }

    /// What: Bring the projection in line with the drawing area.
    ///
    /// Inputs:
    /// - `width`, `height`: Drawing area in terminal cells
    ///
    /// Output:
    /// - `true` when the projection was recomputed
    ///
    /// Details:
    /// - Recomputes when the size changed or after `invalidate_size`.
    pub fn sync_size(&mut self, width: u16, height: u16) -> bool {
        if !self.size_stale && self.size == (width, height) {
            return false;
        }
        self.size = (width, height);
        self.size_stale = false;
        self.recompute();
        true
    }

    /// Zoom in one level (no-op at `MAX_ZOOM`).
    pub fn zoom_in(&mut self) {
        self.set_view(self.center, self.zoom.saturating_add(1));
    }

    /// Zoom out one level (no-op at `MIN_ZOOM`).
    pub fn zoom_out(&mut self) {
        self.set_view(self.center, self.zoom.saturating_sub(1));
    }

    /// What: Pan by a fraction of the visible span.
    ///
    /// Inputs:
    /// - `north`: Fraction of the visible height to move north (negative = south)
    /// - `east`: Fraction of the visible width to move east (negative = west)
    pub fn pan(&mut self, north: f64, east: f64) {
        let lat_span = self.y_bounds[1] - self.y_bounds[0];
        let lng_span = self.x_bounds[1] - self.x_bounds[0];
        let target = LatLng::new(
            self.center.lat + north * lat_span,
            self.center.lng + east * lng_span,
        );
        self.set_view(target, self.zoom);
    }

    /// Whether `point` falls inside the drawing area.
    #[must_use]
    pub fn is_visible(&self, point: LatLng) -> bool {
        point.lng >= self.x_bounds[0]
            && point.lng <= self.x_bounds[1]
            && point.lat >= self.y_bounds[0]
            && point.lat <= self.y_bounds[1]
    }

    fn degrees_per_cell(&self) -> f64 {
        360.0 / f64::from(1_u32 << self.zoom) / CELLS_PER_TILE
    }

    fn recompute(&mut self) {
        let lng_per_cell = self.degrees_per_cell();
        let lat_per_cell = lng_per_cell * CELL_ASPECT * self.center.lat.to_radians().cos();
        let half_w = f64::from(self.size.0) * lng_per_cell / 2.0;
        let half_h = f64::from(self.size.1) * lat_per_cell / 2.0;
        self.x_bounds = [self.center.lng - half_w, self.center.lng + half_w];
        self.y_bounds = [self.center.lat - half_h, self.center.lat + half_h];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::abrantes_bounds;

    #[test]
    fn zoom_and_centre_are_clamped() {
        let mut vp = Viewport::new(LatLng::new(38.0, -8.0), 3, abrantes_bounds());
        assert_eq!(vp.zoom(), MIN_ZOOM);
        assert!(abrantes_bounds().contains(vp.center()));
        vp.set_view(vp.center(), 40);
        assert_eq!(vp.zoom(), MAX_ZOOM);
        vp.zoom_in();
        assert_eq!(vp.zoom(), MAX_ZOOM);
    }

    #[test]
    fn projection_is_empty_until_first_sync() {
        let mut vp = Viewport::new(abrantes_bounds().center(), 12, abrantes_bounds());
        assert!(vp.size_stale());
        assert!(!vp.is_visible(LatLng::new(39.46, -8.20)));

        assert!(vp.sync_size(80, 24));
        assert!(!vp.size_stale());
        assert!(vp.is_visible(vp.center()));
        // Same size, nothing pending: no recompute
        assert!(!vp.sync_size(80, 24));

        vp.invalidate_size();
        assert!(vp.sync_size(80, 24));
    }

    #[test]
    fn zooming_in_narrows_the_window() {
        let mut vp = Viewport::new(abrantes_bounds().center(), 12, abrantes_bounds());
        vp.sync_size(80, 24);
        let wide = vp.x_bounds()[1] - vp.x_bounds()[0];
        vp.zoom_in();
        let narrow = vp.x_bounds()[1] - vp.x_bounds()[0];
        assert!((wide / narrow - 2.0).abs() < 1e-9);
    }

    #[test]
    fn panning_stays_inside_max_bounds() {
        let mut vp = Viewport::new(abrantes_bounds().center(), 12, abrantes_bounds());
        vp.sync_size(80, 24);
        for _ in 0..50 {
            vp.pan(0.5, 0.5);
        }
        assert!(abrantes_bounds().contains(vp.center()));
    }
}
