use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::image_label;

use super::helpers::centered_rect;

/// What: Render the landmark description page.
///
/// Details:
/// - Upper part: title, the labelled year/address/type lines and the text.
/// - Lower part: the carousel, showing the active image and its position.
pub(super) fn render_description_page(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let Some(desc) = app.description.as_ref() else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            desc.year_line.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(Span::styled(
            desc.address_line.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(Span::styled(
            desc.type_line.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
    ];
    lines.extend(
        desc.info
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text)))),
    );
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", desc.title),
                    Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay)),
        );
    f.render_widget(body, chunks[0]);

    let images = desc.carousel.images();
    let carousel_line = desc.carousel.active_image().map_or_else(
        || Line::from(Span::styled("-", Style::default().fg(th.overlay))),
        |img| {
            Line::from(vec![
                Span::styled(
                    format!("◀ {}  ", app.page_text.map.previous),
                    Style::default().fg(th.subtext),
                ),
                Span::styled(
                    format!("{} ({}/{})", image_label(img), desc.carousel.active() + 1, images.len()),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} ▶", app.page_text.map.next),
                    Style::default().fg(th.subtext),
                ),
            ])
        },
    );
    f.render_widget(
        Paragraph::new(carousel_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay)),
        ),
        chunks[1],
    );
}

/// What: Render the enlarged image view.
///
/// Details:
/// - Terminals cannot show the photo itself; the image name and full reference
///   are shown centred and `o` hands the reference to the system opener.
pub(super) fn render_amplified(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let Some(amp) = app.amplified.as_ref() else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };
    let title = app
        .pois
        .get(&app.language, amp.poi_id)
        .map(|p| p.title.clone())
        .unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            image_label(&amp.image).to_string(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(amp.image.clone(), Style::default().fg(th.subtext))),
    ];
    let rect = centered_rect(area, 70, 7);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay)),
        area,
    );
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .title(Span::styled(format!(" {title} "), Style::default().fg(th.text)))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(th.accent))
                    .style(Style::default().bg(th.mantle)),
            ),
        rect,
    );
}
