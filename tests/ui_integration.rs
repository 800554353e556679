//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! Every view is drawn from the shipped documents without a real terminal.

mod common;

use crossterm::event::KeyCode;
use linotour::events::handle_event;
use linotour::state::{AppState, Modal};
use linotour::ui::ui;
use ratatui::{Terminal, backend::TestBackend};

use common::{key, shipped_app};

fn render(app: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test]
async fn every_tab_renders_its_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = shipped_app(&dir.path().join("settings.conf"), None).await;

    let screen = render(&mut app);
    assert!(screen.contains("Itinerário Raul Lino"));
    assert!(screen.contains("Bem-vindo ao itinerário"));

    let _ = handle_event(&key(KeyCode::Char('2')), &mut app);
    assert!(render(&mut app).contains("Raul Lino (1879-1974)"));

    let _ = handle_event(&key(KeyCode::Char('3')), &mut app);
    let screen = render(&mut app);
    assert!(screen.contains("Mapa"));
    assert!(screen.contains('●'));
    assert!(
        app.markers
            .as_ref()
            .is_some_and(|m| !m.viewport().size_stale())
    );

    let _ = handle_event(&key(KeyCode::Char('4')), &mut app);
    let screen = render(&mut app);
    assert!(screen.contains("Idioma"));
    assert!(screen.contains("en-GB"));
    assert!(screen.contains("pt-PT"));
}

#[tokio::test]
async fn description_and_modal_render_in_english() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = shipped_app(&dir.path().join("settings.conf"), Some("en-GB")).await;
    let _ = handle_event(&key(KeyCode::Char('3')), &mut app);
    let _ = handle_event(&key(KeyCode::Char('n')), &mut app);
    let _ = handle_event(&key(KeyCode::Enter), &mut app);
    assert!(render(&mut app).contains("Building "));
    let _ = handle_event(&key(KeyCode::Enter), &mut app);
    let screen = render(&mut app);
    assert!(screen.contains("Year: "));
    assert!(screen.contains("Type of building: "));
    assert!(screen.contains("(1/2)"));

    app.modal = Modal::Alert {
        message: app.page_text.location.error.clone(),
    };
    assert!(render(&mut app).contains("Your location could not be determined."));
}
