//! Landmark data loaded from the POI document.

pub mod poi;

pub use poi::{DEFAULT_LANGUAGE, ITINERARY_POI_IDS, Poi, PoiDocument, PoiStore};
