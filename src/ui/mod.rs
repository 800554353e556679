//! Rendering for linotour's TUI.
//!
//! `ui` draws one frame from `AppState`: the navigation bar, the body of the
//! current view, a key hint line and any open modal on top. Rendering never
//! changes what is shown; the only state it touches is the map projection,
//! which is synced to the drawing area each frame.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, View};
use crate::theme::theme;

mod description;
mod helpers;
mod map;
mod modals;
mod nav;
mod pages;
mod settings;

/// What: Render one frame of the application.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; the map viewport is resized to the drawing area
///
/// Details:
/// - Layout is a three-row navigation bar, the view body and a one-row key hint.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    nav::render_nav(f, app, chunks[0]);
    match app.current_view {
        View::Home => pages::render_text_page(f, &app.page_text.home, app.page_scroll, chunks[1]),
        View::Bio => pages::render_text_page(f, &app.page_text.bio, app.page_scroll, chunks[1]),
        View::MapPage => map::render_map(f, app, chunks[1]),
        View::Desc => description::render_description_page(f, app, chunks[1]),
        View::AmplifiedImage => description::render_amplified(f, app, chunks[1]),
        View::Settings => settings::render_settings(f, app, chunks[1]),
    }
    helpers::render_key_hints(f, app, chunks[2]);
    modals::render_modal(f, app, area);
}
