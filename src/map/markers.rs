//! Marker lifecycle: landmark pins, the itinerary layers and the user marker.

use crate::data::Poi;
use crate::geo::{LatLng, LatLngBounds};

use super::itinerary::{ITINERARY_CENTER, ITINERARY_ZOOM, Polyline, route_polylines};
use super::viewport::Viewport;

/// Zoom used when the map is first set up.
pub const INITIAL_ZOOM: u8 = 12;

/// Icon drawn for a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Default landmark pin.
    Green,
    /// Itinerary landmark pin.
    Yellow,
    /// The user's live position.
    User,
}

/// Action bound to a marker's popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupAction {
    /// Open the description page of the landmark with this id.
    ShowDescription(u32),
}

/// Popup attached to a marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup {
    /// Text shown in the popup.
    pub title: String,
    /// What activating the popup does, if anything.
    pub action: Option<PopupAction>,
}

/// One map pin.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Landmark id, `None` for the user marker.
    pub poi_id: Option<u32>,
    /// Pin position.
    pub coords: LatLng,
    /// Pin icon.
    pub icon: MarkerIcon,
    /// Popup bound to the pin.
    pub popup: Popup,
}

impl Marker {
    fn for_poi(poi: &Poi, icon: MarkerIcon) -> Self {
        Self {
            poi_id: Some(poi.id),
            coords: poi.coords,
            icon,
            popup: Popup {
                title: poi.title.clone(),
                action: Some(PopupAction::ShowDescription(poi.id)),
            },
        }
    }
}

/// Layers the map can have attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerId {
    /// Landmarks outside the itinerary, always attached.
    Base,
    /// Itinerary landmarks with the default icon.
    Default,
    /// Itinerary landmarks with the alternate icon.
    Itinerary,
    /// The two route polylines.
    Routes,
    /// The user's position marker.
    User,
}

/// What happened to the user marker during a refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMarkerChange {
    /// No position was available.
    NoPosition,
    /// Marker created and attached.
    Created,
    /// Existing marker moved in place.
    Moved,
    /// Marker detached because the user left the bounds.
    Removed,
    /// User outside the bounds and no marker to remove.
    Unchanged,
}

/// Owns every marker shown on the map.
///
/// Exactly one of {default group, itinerary group + routes} is attached at any
/// time. The user marker is an `Option`, so "marker exists" and "marker is
/// attached" can never disagree.
#[derive(Clone, Debug)]
pub struct MarkerManager {
    base: Vec<Marker>,
    default_group: Vec<Marker>,
    itinerary_group: Vec<Marker>,
    routes: Vec<Polyline>,
    itinerary_shown: bool,
    user_marker: Option<Marker>,
    user_bounds: LatLngBounds,
    viewport: Viewport,
    selected: Option<usize>,
    popup_open: bool,
}

impl MarkerManager {
    /// What: Create an empty map centred on `center`.
    ///
    /// Inputs:
    /// - `center`: Initial map centre (user position when known)
    /// - `bounds`: Max bounds of the map and the user-marker bounding box
    ///
    /// Output:
    /// - Manager with no landmarks, default view selected
    #[must_use]
    pub fn new(center: LatLng, bounds: LatLngBounds) -> Self {
        Self {
            base: Vec::new(),
            default_group: Vec::new(),
            itinerary_group: Vec::new(),
            routes: route_polylines(),
            itinerary_shown: false,
            user_marker: None,
            user_bounds: bounds,
            viewport: Viewport::new(center, INITIAL_ZOOM, bounds),
            selected: None,
            popup_open: false,
        }
    }

    /// What: Build markers for every landmark.
    ///
    /// Inputs:
    /// - `pois`: Landmarks for the active language
    /// - `language`: Language of the popup titles (logged only)
    ///
    /// Details:
    /// - Itinerary landmarks go into both the default group (green) and the
    ///   itinerary group (yellow); the rest go into the base layer.
    /// - Replaces previously loaded landmarks; the user marker and the current
    ///   view mode are kept.
    pub fn load_pois(&mut self, pois: &[Poi], language: &str) {
        self.base.clear();
        self.default_group.clear();
        self.itinerary_group.clear();
        for poi in pois {
            if poi.on_itinerary() {
                self.itinerary_group
                    .push(Marker::for_poi(poi, MarkerIcon::Yellow));
                self.default_group.push(Marker::for_poi(poi, MarkerIcon::Green));
            } else {
                self.base.push(Marker::for_poi(poi, MarkerIcon::Green));
            }
        }
        self.selected = None;
        self.popup_open = false;
        tracing::info!(
            language,
            base = self.base.len(),
            itinerary = self.itinerary_group.len(),
            "[Map] landmarks loaded"
        );
    }

    /// What: Refresh popup titles after a language switch.
    ///
    /// Inputs:
    /// - `pois`: Landmarks in the new language
    ///
    /// Details:
    /// - Matches by id; markers whose id is missing keep their old title.
    pub fn relabel(&mut self, pois: &[Poi]) {
        let groups = [
            &mut self.base,
            &mut self.default_group,
            &mut self.itinerary_group,
        ];
        for group in groups {
            for m in group.iter_mut() {
                if let Some(p) = m.poi_id.and_then(|id| pois.iter().find(|p| p.id == id)) {
                    m.popup.title.clone_from(&p.title);
                }
            }
        }
    }

    /// What: Swap between the default view and the itinerary view.
    ///
    /// Output:
    /// - `true` when the itinerary is now shown
    ///
    /// Details:
    /// - Showing the itinerary recentres on the route.
    /// - Two calls restore the original layer state.
    pub fn toggle_itinerary(&mut self) -> bool {
        self.itinerary_shown = !self.itinerary_shown;
        if self.itinerary_shown {
            self.viewport.set_view(ITINERARY_CENTER, ITINERARY_ZOOM);
        }
        self.selected = None;
        self.popup_open = false;
        tracing::debug!(itinerary = self.itinerary_shown, "[Map] itinerary toggled");
        self.itinerary_shown
    }

    /// Whether the itinerary view is active.
    #[must_use]
    pub const fn itinerary_shown(&self) -> bool {
        self.itinerary_shown
    }

    /// Layers currently attached to the map.
    #[must_use]
    pub fn attached_layers(&self) -> Vec<LayerId> {
        let mut layers = vec![LayerId::Base];
        if self.itinerary_shown {
            layers.push(LayerId::Routes);
            layers.push(LayerId::Itinerary);
        } else {
            layers.push(LayerId::Default);
        }
        if self.user_marker.is_some() {
            layers.push(LayerId::User);
        }
        layers
    }

    /// Landmark markers currently attached, base layer first.
    pub fn visible_markers(&self) -> impl Iterator<Item = &Marker> {
        let group = if self.itinerary_shown {
            &self.itinerary_group
        } else {
            &self.default_group
        };
        self.base.iter().chain(group.iter())
    }

    /// Route polylines, if attached.
    #[must_use]
    pub fn visible_routes(&self) -> &[Polyline] {
        if self.itinerary_shown {
            &self.routes
        } else {
            &[]
        }
    }

    /// Ids reachable in the default view.
    #[must_use]
    pub fn default_set_ids(&self) -> Vec<u32> {
        self.base
            .iter()
            .chain(self.default_group.iter())
            .filter_map(|m| m.poi_id)
            .collect()
    }

    /// Ids carried by the itinerary group.
    #[must_use]
    pub fn itinerary_set_ids(&self) -> Vec<u32> {
        self.itinerary_group.iter().filter_map(|m| m.poi_id).collect()
    }

    /// What: Create, move or remove the user marker for `position`.
    ///
    /// Inputs:
    /// - `position`: Last known coordinates, if any
    ///
    /// Output:
    /// - Which lifecycle step was taken
    ///
    /// Details:
    /// - Without a position nothing changes.
    /// - Inside the bounds the marker is created once and then moved in place.
    /// - Outside the bounds an existing marker is removed.
    pub fn refresh_user_marker(&mut self, position: Option<LatLng>) -> UserMarkerChange {
        let Some(pos) = position else {
            tracing::debug!("[Map] user marker refresh skipped: no position yet");
            return UserMarkerChange::NoPosition;
        };
        if self.user_bounds.contains(pos) {
            if let Some(marker) = self.user_marker.as_mut() {
                marker.coords = pos;
                UserMarkerChange::Moved
            } else {
                self.user_marker = Some(Marker {
                    poi_id: None,
                    coords: pos,
                    icon: MarkerIcon::User,
                    popup: Popup {
                        title: "You are here.".to_string(),
                        action: None,
                    },
                });
                tracing::debug!(lat = pos.lat, lng = pos.lng, "[Map] user marker created");
                UserMarkerChange::Created
            }
        } else if self.user_marker.take().is_some() {
            tracing::debug!(lat = pos.lat, lng = pos.lng, "[Map] user left bounds; marker removed");
            UserMarkerChange::Removed
        } else {
            UserMarkerChange::Unchanged
        }
    }

    /// Whether the user marker is attached.
    #[must_use]
    pub const fn marker_exists(&self) -> bool {
        self.user_marker.is_some()
    }

    /// The user marker, if attached.
    #[must_use]
    pub const fn user_marker(&self) -> Option<&Marker> {
        self.user_marker.as_ref()
    }

    /// Read access to the viewport.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable access to the viewport.
    pub const fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Recentre on `center` keeping the zoom.
    pub fn recenter(&mut self, center: LatLng) {
        let zoom = self.viewport.zoom();
        self.viewport.set_view(center, zoom);
    }

    /// What: Move the selection to the next/previous attached landmark.
    ///
    /// Inputs:
    /// - `forward`: Direction of travel (wraps around)
    ///
    /// Details:
    /// - Closes any open popup.
    pub fn select_next(&mut self, forward: bool) {
        let n = self.visible_markers().count();
        if n == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            None => {
                if forward {
                    0
                } else {
                    n - 1
                }
            }
            Some(i) if forward => (i + 1) % n,
            Some(0) => n - 1,
            Some(i) => (i - 1).min(n - 1),
        });
        self.popup_open = false;
    }

    /// The selected landmark marker, if any.
    #[must_use]
    pub fn selected_marker(&self) -> Option<&Marker> {
        self.selected.and_then(|i| self.visible_markers().nth(i))
    }

    /// Whether the selected marker's popup is open.
    #[must_use]
    pub const fn popup_open(&self) -> bool {
        self.popup_open
    }

    /// What: Activate the selected marker.
    ///
    /// Output:
    /// - The popup action when the popup was already open, `None` otherwise
    ///
    /// Details:
    /// - First activation opens the popup; the second one triggers its action.
    pub fn activate_selected(&mut self) -> Option<PopupAction> {
        let action = self.selected_marker()?.popup.action;
        if self.popup_open {
            self.popup_open = false;
            action
        } else {
            self.popup_open = true;
            None
        }
    }

    /// Close the popup without triggering it.
    pub const fn close_popup(&mut self) {
        self.popup_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::abrantes_bounds;

    fn poi(id: u32) -> Poi {
        Poi {
            id,
            title: format!("Casa {id}"),
            coords: LatLng::new(39.46 + f64::from(id) * 0.0001, -8.198),
            info: String::new(),
            year: String::new(),
            location: String::new(),
            kind: String::new(),
            images: Vec::new(),
        }
    }

    fn manager() -> MarkerManager {
        let mut m = MarkerManager::new(abrantes_bounds().center(), abrantes_bounds());
        m.load_pois(&(1..=16).map(poi).collect::<Vec<_>>(), "pt-PT");
        m
    }

    #[test]
    fn itinerary_members_land_in_both_sets() {
        let m = manager();
        assert!(m.default_set_ids().contains(&4));
        assert!(m.itinerary_set_ids().contains(&4));
        assert!(m.default_set_ids().contains(&2));
        assert!(!m.itinerary_set_ids().contains(&2));
        assert_eq!(m.itinerary_set_ids().len(), 9);
        assert_eq!(m.default_set_ids().len(), 16);
    }

    #[test]
    fn toggle_swaps_layers_and_double_toggle_restores() {
        let mut m = manager();
        let before = m.attached_layers();
        assert_eq!(before, vec![LayerId::Base, LayerId::Default]);
        assert!(m.visible_routes().is_empty());

        assert!(m.toggle_itinerary());
        let shown = m.attached_layers();
        assert!(shown.contains(&LayerId::Itinerary));
        assert!(shown.contains(&LayerId::Routes));
        assert!(!shown.contains(&LayerId::Default));
        assert_eq!(m.visible_routes().len(), 2);
        assert_eq!(m.viewport().zoom(), ITINERARY_ZOOM);
        assert!(
            m.visible_markers()
                .filter(|mk| mk.poi_id == Some(4))
                .all(|mk| mk.icon == MarkerIcon::Yellow)
        );

        assert!(!m.toggle_itinerary());
        assert_eq!(m.attached_layers(), before);
    }

    #[test]
    fn user_marker_is_created_once_moved_then_removed() {
        let mut m = manager();
        assert_eq!(m.refresh_user_marker(None), UserMarkerChange::NoPosition);
        assert!(!m.marker_exists());

        let inside = LatLng::new(39.46, -8.20);
        assert_eq!(m.refresh_user_marker(Some(inside)), UserMarkerChange::Created);
        assert!(m.marker_exists());
        assert!(m.attached_layers().contains(&LayerId::User));

        let moved = LatLng::new(39.47, -8.21);
        assert_eq!(m.refresh_user_marker(Some(moved)), UserMarkerChange::Moved);
        assert_eq!(m.user_marker().map(|mk| mk.coords), Some(moved));

        let outside = LatLng::new(38.0, -8.0);
        assert_eq!(m.refresh_user_marker(Some(outside)), UserMarkerChange::Removed);
        assert!(!m.marker_exists());
        assert!(!m.attached_layers().contains(&LayerId::User));
        assert_eq!(m.refresh_user_marker(Some(outside)), UserMarkerChange::Unchanged);
    }

    #[test]
    fn flag_matches_attachment_over_alternating_updates() {
        let mut m = manager();
        let inside = LatLng::new(39.46, -8.20);
        let outside = LatLng::new(38.0, -8.0);
        for step in 0..20 {
            let pos = if step % 3 == 0 { outside } else { inside };
            m.refresh_user_marker(Some(pos));
            assert_eq!(
                m.marker_exists(),
                m.attached_layers().contains(&LayerId::User)
            );
            assert_eq!(m.marker_exists(), abrantes_bounds().contains(pos));
        }
    }

    #[test]
    fn popup_opens_then_triggers_description() {
        let mut m = manager();
        assert_eq!(m.activate_selected(), None);
        m.select_next(true);
        let id = m.selected_marker().and_then(|mk| mk.poi_id).expect("selection");
        assert_eq!(m.activate_selected(), None);
        assert!(m.popup_open());
        assert_eq!(m.activate_selected(), Some(PopupAction::ShowDescription(id)));
        assert!(!m.popup_open());
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut m = manager();
        m.select_next(false);
        let last = m.selected_marker().cloned();
        m.select_next(true);
        let first = m.selected_marker().cloned();
        assert_ne!(last, first);
        m.select_next(false);
        assert_eq!(m.selected_marker().cloned(), last);
    }

    #[test]
    fn relabel_updates_popup_titles_by_id() {
        let mut m = manager();
        let mut en = poi(4);
        en.title = "House 4".to_string();
        m.relabel(&[en]);
        assert!(
            m.visible_markers()
                .filter(|mk| mk.poi_id == Some(4))
                .all(|mk| mk.popup.title == "House 4")
        );
        m.toggle_itinerary();
        assert!(
            m.visible_markers()
                .filter(|mk| mk.poi_id == Some(4))
                .all(|mk| mk.popup.title == "House 4")
        );
    }
}
