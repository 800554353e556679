//! End-to-end navigation over the shipped documents: tabs, map pins,
//! itinerary toggle, description, enlarged image and language switching.

mod common;

use crossterm::event::KeyCode;
use linotour::data::ITINERARY_POI_IDS;
use linotour::events::{EventOutcome, handle_event};
use linotour::state::View;

use common::{key, shipped_app};

#[tokio::test]
async fn shipped_documents_load_in_both_languages() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = shipped_app(&dir.path().join("settings.conf"), None).await;
    assert_eq!(app.language, "pt-PT");
    assert_eq!(app.page_text.map.title, "Mapa");
    assert_eq!(app.pois.pois("pt-PT").len(), 16);
    assert_eq!(app.pois.pois("en-GB").len(), 16);
    assert!(app.localization.has_language("en-GB"));
}

#[tokio::test]
async fn map_itinerary_and_description_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = shipped_app(&dir.path().join("settings.conf"), None).await;

    let out = handle_event(&key(KeyCode::Char('3')), &mut app);
    assert!(matches!(out, EventOutcome::Effects(fx) if fx.request_permission));
    let markers = app.markers.as_ref().expect("map set up");
    assert_eq!(markers.visible_markers().count(), 16);
    assert_eq!(markers.itinerary_set_ids(), ITINERARY_POI_IDS.to_vec());
    assert!(markers.visible_routes().is_empty());

    let _ = handle_event(&key(KeyCode::Char('i')), &mut app);
    let markers = app.markers.as_ref().expect("map set up");
    assert!(markers.itinerary_shown());
    assert_eq!(markers.visible_routes().len(), 2);
    assert_eq!(markers.viewport().zoom(), 16);

    let _ = handle_event(&key(KeyCode::Char('n')), &mut app);
    let selected = app
        .markers
        .as_ref()
        .and_then(|m| m.selected_marker())
        .and_then(|m| m.poi_id)
        .expect("a pin is selected");
    let _ = handle_event(&key(KeyCode::Enter), &mut app);
    let out = handle_event(&key(KeyCode::Enter), &mut app);
    assert_eq!(out, EventOutcome::None);
    assert_eq!(app.current_view, View::Desc);
    assert_eq!(app.highlighted_tab, None);
    let desc = app.description.as_ref().expect("description rendered");
    assert_eq!(desc.poi_id, selected);
    assert!(desc.year_line.starts_with("Ano: "));

    let _ = handle_event(&key(KeyCode::Right), &mut app);
    let _ = handle_event(&key(KeyCode::Enter), &mut app);
    assert_eq!(app.current_view, View::AmplifiedImage);
    assert_eq!(app.amplified.as_ref().map(|a| a.index), Some(1));

    let _ = handle_event(&key(KeyCode::Esc), &mut app);
    let _ = handle_event(&key(KeyCode::Esc), &mut app);
    assert_eq!(app.current_view, View::MapPage);
    assert_eq!(app.highlighted_tab, Some(View::MapPage));
    assert!(app.markers.as_ref().is_some_and(|m| m.itinerary_shown()));
}

#[tokio::test]
async fn switching_language_relabels_and_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings_path = dir.path().join("settings.conf");
    let mut app = shipped_app(&settings_path, None).await;

    let _ = handle_event(&key(KeyCode::Char('3')), &mut app);
    let _ = handle_event(&key(KeyCode::Char('n')), &mut app);
    let _ = handle_event(&key(KeyCode::Enter), &mut app);
    let _ = handle_event(&key(KeyCode::Enter), &mut app);
    let id = app.description.as_ref().map(|d| d.poi_id).expect("open");

    let _ = handle_event(&key(KeyCode::Char('4')), &mut app);
    assert_eq!(app.language_options, vec!["en-GB".to_string(), "pt-PT".to_string()]);
    let _ = handle_event(&key(KeyCode::Up), &mut app);
    let _ = handle_event(&key(KeyCode::Enter), &mut app);
    assert_eq!(app.language, "en-GB");
    assert_eq!(app.current_view, View::Settings);
    assert_eq!(app.page_text.settings.title, "Settings");

    let desc = app.description.as_ref().expect("still rendered");
    assert_eq!(desc.poi_id, id);
    assert_eq!(desc.title, format!("Building {id}"));
    assert!(desc.year_line.starts_with("Year: "));
    let popup = app
        .markers
        .as_ref()
        .and_then(|m| m.visible_markers().find(|p| p.poi_id == Some(id)))
        .map(|m| m.popup.title.clone());
    assert_eq!(popup.as_deref(), Some(format!("Building {id}").as_str()));

    let stored = std::fs::read_to_string(&settings_path).expect("settings written");
    assert!(stored.contains("language = en-GB"));

    let reloaded = shipped_app(&settings_path, None).await;
    assert_eq!(reloaded.language, "en-GB");
    let overridden = shipped_app(&settings_path, Some("pt-PT")).await;
    assert_eq!(overridden.language, "pt-PT");
}
