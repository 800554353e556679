//! Map model: viewport, landmark markers, itinerary overlay and the user marker.
//!
//! Rendering lives in `ui::map`; this module only holds state and the rules
//! that keep it consistent with landmark data and location updates.

pub mod description;
pub mod itinerary;
pub mod markers;
pub mod viewport;

pub use description::{AmplifiedImage, Carousel, Description, DescriptionError, render_description};
pub use itinerary::{ITINERARY_CENTER, ITINERARY_ZOOM, Polyline, RouteColor, route_polylines};
pub use markers::{
    LayerId, Marker, MarkerIcon, MarkerManager, Popup, PopupAction, UserMarkerChange,
};
pub use viewport::{MAX_ZOOM, MIN_ZOOM, Viewport};
