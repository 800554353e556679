use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::i18n::PageStrings;
use crate::theme::theme;

/// What: Render a static text page (home or biography).
///
/// Inputs:
/// - `page`: Title and paragraphs in the active language
/// - `scroll`: Vertical scroll offset in lines
///
/// Details:
/// - Paragraphs are separated by a blank line and wrapped to the area width.
pub(super) fn render_text_page(f: &mut Frame, page: &PageStrings, scroll: u16, area: Rect) {
    let th = theme();
    let mut lines: Vec<Line> = Vec::with_capacity(page.paragraphs.len() * 2);
    for (i, p) in page.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(p.clone(), Style::default().fg(th.text))));
    }
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", page.title),
                    Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay)),
        );
    f.render_widget(body, area);
}
