use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the settings page with the language selector.
///
/// Details:
/// - The active language is marked; the cursor row is highlighted.
pub(super) fn render_settings(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let items: Vec<ListItem> = app
        .language_options
        .iter()
        .map(|lang| {
            let mark = if *lang == app.language { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(th.divisor)),
                Span::styled(lang.clone(), Style::default().fg(th.text)),
            ]))
        })
        .collect();
    let title = format!(
        " {} · {} ",
        app.page_text.settings.title, app.page_text.settings.language
    );
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(th.accent)
                .bg(th.mantle)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ")
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay)),
        );
    let mut state = ListState::default();
    if !app.language_options.is_empty() {
        state.select(Some(app.language_cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}
