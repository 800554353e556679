use crate::geo::abrantes_bounds;
use crate::map::{AmplifiedImage, DescriptionError, MarkerManager, UserMarkerChange, render_description};
use crate::state::{AppState, View};

/// Side effects a view change asks the runtime to perform.
///
/// The controller stays synchronous; the runtime owns the provider and the
/// location session and acts on these flags after each transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewEffects {
    /// Ask the provider for location permission.
    pub request_permission: bool,
    /// Ask the provider whether location services are on.
    pub check_location_enabled: bool,
    /// Drop the running location session.
    pub stop_location_session: bool,
}

/// What: Switch the visible view.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `target`: View to show
///
/// Output:
/// - Effects for the runtime (permission request, services check, session stop)
///
/// Details:
/// - Exactly one view is visible afterwards and it is `target`.
/// - The divisor highlight follows the navigation tabs; detail views have no
///   tab, so nothing is highlighted while one of them is shown.
/// - Leaving the map releases the location session.
/// - Entering the map sets the markers up on first use, invalidates the map
///   size, refreshes the user marker and asks for permission.
/// - Entering settings repopulates the language selector.
pub fn change_view(app: &mut AppState, target: View) -> ViewEffects {
    let previous = app.current_view;
    let mut effects = ViewEffects::default();

    if !previous.is_overlay() {
        app.highlighted_tab = None;
    }
    if !target.is_overlay() {
        app.highlighted_tab = Some(target);
    }

    if previous == View::MapPage && target != View::MapPage && app.location_session_active {
        effects.stop_location_session = true;
    }

    app.current_view = target;
    app.page_scroll = 0;
    tracing::debug!(from = previous.id(), to = target.id(), "view changed");

    match target {
        View::MapPage => {
            ensure_map(app);
            if let Some(markers) = app.markers.as_mut() {
                markers.viewport_mut().invalidate_size();
            }
            refresh_user_marker(app);
            effects.request_permission = true;
            effects.check_location_enabled = true;
        }
        View::Settings => crate::logic::language::populate_language_selector(app),
        _ => {}
    }
    effects
}

/// What: Return from a detail view to the view it was opened from.
///
/// Output:
/// - Effects of the resulting transition; a no-op outside `Desc` and `AmplifiedImage`
pub fn back(app: &mut AppState) -> ViewEffects {
    match app.current_view {
        View::Desc => change_view(app, View::MapPage),
        View::AmplifiedImage => change_view(app, View::Desc),
        _ => ViewEffects::default(),
    }
}

/// What: Fill the description view for landmark `id` and show it.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `id`: External landmark id
///
/// Output:
/// - `Ok(effects)` of the switch to `Desc`, or `UnknownPoi` when no landmark has `id`
///
/// Details:
/// - Field values are shown verbatim, labelled in the active language.
/// - The carousel starts on the first image.
pub fn show_description(app: &mut AppState, id: u32) -> Result<ViewEffects, DescriptionError> {
    let Some(poi) = app.pois.get(&app.language, id) else {
        tracing::warn!(id, language = %app.language, "description requested for unknown landmark");
        return Err(DescriptionError::UnknownPoi {
            id,
            language: app.language.clone(),
        });
    };
    app.description = Some(render_description(poi, &app.page_text));
    app.amplified = None;
    Ok(change_view(app, View::Desc))
}

/// What: Show image `index` of the open description full screen.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `poi_id`: Landmark the image belongs to
/// - `index`: Carousel position
///
/// Output:
/// - `Ok(effects)` of the switch to `AmplifiedImage`, or an error when the
///   landmark or the image does not exist
pub fn amplify_image(
    app: &mut AppState,
    poi_id: u32,
    index: usize,
) -> Result<ViewEffects, DescriptionError> {
    let Some(poi) = app.pois.get(&app.language, poi_id) else {
        return Err(DescriptionError::UnknownPoi {
            id: poi_id,
            language: app.language.clone(),
        });
    };
    let Some(image) = poi.images.get(index).cloned() else {
        tracing::warn!(poi_id, index, "image requested past the end of the carousel");
        return Err(DescriptionError::UnknownImage { id: poi_id, index });
    };
    app.amplified = Some(AmplifiedImage {
        poi_id,
        index,
        image,
    });
    Ok(change_view(app, View::AmplifiedImage))
}

/// Set the map up on first use, centred on the user when a fix is known.
pub fn ensure_map(app: &mut AppState) {
    if app.markers.is_some() {
        return;
    }
    let bounds = abrantes_bounds();
    let center = app
        .user_position
        .as_ref()
        .map_or_else(|| bounds.center(), |p| p.coords);
    let mut markers = MarkerManager::new(center, bounds);
    markers.load_pois(app.pois.pois(&app.language), &app.language);
    tracing::info!(
        lat = center.lat,
        lng = center.lng,
        "map initialised"
    );
    app.markers = Some(markers);
}

/// What: Place, move or remove the user marker from the last known position.
///
/// Output:
/// - What happened to the marker, or `None` while the map is not set up
pub fn refresh_user_marker(app: &mut AppState) -> Option<UserMarkerChange> {
    let coords = app.user_position.as_ref().map(|p| p.coords);
    app.markers
        .as_mut()
        .map(|markers| markers.refresh_user_marker(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Poi, PoiDocument, PoiStore};
    use crate::geo::LatLng;
    use crate::location::Position;

    fn poi(id: u32) -> Poi {
        Poi {
            id,
            title: format!("Casa {id}"),
            coords: LatLng::new(39.46, -8.2),
            info: "info".into(),
            year: "1920".into(),
            location: "Rua".into(),
            kind: "Moradia".into(),
            images: vec!["a.jpg".into(), "b.jpg".into()],
        }
    }

    fn app() -> AppState {
        AppState {
            pois: PoiStore::from_document(PoiDocument::Shared((1..=4).map(poi).collect())),
            ..AppState::default()
        }
    }

    #[test]
    fn every_target_becomes_the_only_visible_view() {
        let mut app = app();
        for from in View::ALL {
            for to in View::ALL {
                app.current_view = from;
                let _ = change_view(&mut app, to);
                assert_eq!(app.visible_views(), vec![to]);
            }
        }
    }

    #[test]
    fn divisor_follows_tabs_and_clears_on_detail_views() {
        let mut app = app();
        let _ = change_view(&mut app, View::MapPage);
        assert_eq!(app.highlighted_tab, Some(View::MapPage));
        let _ = change_view(&mut app, View::Desc);
        assert_eq!(app.highlighted_tab, None);
        let _ = change_view(&mut app, View::AmplifiedImage);
        assert_eq!(app.highlighted_tab, None);
        let _ = change_view(&mut app, View::Bio);
        assert_eq!(app.highlighted_tab, Some(View::Bio));
    }

    #[test]
    fn entering_map_sets_up_markers_and_requests_permission() {
        let mut app = app();
        let fx = change_view(&mut app, View::MapPage);
        assert!(fx.request_permission);
        assert!(fx.check_location_enabled);
        assert!(!fx.stop_location_session);
        let markers = app.markers.as_ref().expect("map set up");
        assert!(markers.viewport().size_stale());
        assert_eq!(markers.itinerary_set_ids(), vec![1, 4]);
    }

    #[test]
    fn leaving_map_stops_a_running_session() {
        let mut app = app();
        let _ = change_view(&mut app, View::MapPage);
        app.location_session_active = true;
        let fx = change_view(&mut app, View::Home);
        assert!(fx.stop_location_session);

        app.location_session_active = false;
        let _ = change_view(&mut app, View::MapPage);
        let fx = change_view(&mut app, View::Home);
        assert!(!fx.stop_location_session);
    }

    #[test]
    fn entering_map_places_known_position() {
        let mut app = app();
        app.user_position = Some(Position::at(LatLng::new(39.46, -8.20), 5.0));
        let _ = change_view(&mut app, View::MapPage);
        assert!(app.marker_exists());
    }

    #[test]
    fn description_and_back_navigation() {
        let mut app = app();
        let _ = change_view(&mut app, View::MapPage);
        let _ = show_description(&mut app, 3).expect("known id");
        assert_eq!(app.current_view, View::Desc);
        let desc = app.description.as_ref().expect("rendered");
        assert_eq!(desc.title, "Casa 3");
        assert_eq!(desc.carousel.active(), 0);

        let _ = amplify_image(&mut app, 3, 1).expect("second image");
        assert_eq!(app.current_view, View::AmplifiedImage);
        assert_eq!(app.amplified.as_ref().map(|a| a.image.as_str()), Some("b.jpg"));

        let _ = back(&mut app);
        assert_eq!(app.current_view, View::Desc);
        let _ = back(&mut app);
        assert_eq!(app.current_view, View::MapPage);
        let _ = back(&mut app);
        assert_eq!(app.current_view, View::MapPage);
    }

    #[test]
    fn unknown_landmark_and_image_are_rejected() {
        let mut app = app();
        assert!(matches!(
            show_description(&mut app, 99),
            Err(DescriptionError::UnknownPoi { id: 99, .. })
        ));
        assert_eq!(app.current_view, View::Home);
        assert_eq!(
            amplify_image(&mut app, 1, 5),
            Err(DescriptionError::UnknownImage { id: 1, index: 5 })
        );
    }
}
