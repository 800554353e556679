use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

use super::helpers::centered_rect;

/// What: Draw the open modal, if any, centred over `area`.
///
/// Details:
/// - Alerts show the message with a single dismiss button.
/// - Location denials show the cancel button and, when offered, the settings button.
pub(super) fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let (message, buttons, border) = match &app.modal {
        Modal::None => return,
        Modal::Alert { message } => (
            message.as_str(),
            vec![Span::styled(
                "[Enter] OK",
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )],
            th.red,
        ),
        Modal::LocationDenied {
            message,
            offer_settings,
            cancel_label,
            settings_label,
        } => {
            let mut buttons = vec![Span::styled(
                format!("[Esc] {cancel_label}"),
                Style::default().fg(th.text),
            )];
            if *offer_settings {
                buttons.push(Span::raw("   "));
                buttons.push(Span::styled(
                    format!("[s] {settings_label}"),
                    Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                ));
            }
            (message.as_str(), buttons, th.yellow)
        }
    };

    let rect = centered_rect(area, 64, 9);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.text))),
        Line::from(""),
        Line::from(buttons),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(th.mantle)),
            ),
        rect,
    );
}
