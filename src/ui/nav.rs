use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Tabs},
};

use crate::state::{AppState, View};
use crate::theme::theme;

/// Tab label for a navigation view, falling back to its id when untranslated.
fn tab_title(app: &AppState, view: View) -> String {
    let t = &app.page_text;
    let title = match view {
        View::Home => &t.home.title,
        View::Bio => &t.bio.title,
        View::MapPage => &t.map.title,
        View::Settings => &t.settings.title,
        View::Desc | View::AmplifiedImage => return String::new(),
    };
    if title.is_empty() {
        view.id().to_string()
    } else {
        title.clone()
    }
}

/// What: Render the navigation bar.
///
/// Details:
/// - The application title sits on the border; the divisor is drawn under the
///   highlighted tab only, so detail views show no highlight.
pub(super) fn render_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let titles: Vec<Line> = View::TABS
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!("{} {}", i + 1, tab_title(app, *v))))
        .collect();
    let selected = app
        .highlighted_tab
        .and_then(|h| View::TABS.iter().position(|v| *v == h));
    let heading = if app.page_text.main_title.is_empty() {
        app.page_text.title.clone()
    } else {
        app.page_text.main_title.clone()
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(th.subtext))
        .highlight_style(
            Style::default()
                .fg(th.divisor)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(th.overlay)))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {heading} "),
                    Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(tabs, area);
}
