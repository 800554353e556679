use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Modal, View};
use crate::theme::theme;

/// What: Compute a rectangle centred in `area`.
///
/// Inputs:
/// - `area`: Outer area
/// - `max_w`, `max_h`: Wanted size, clamped to `area` minus a small margin
///
/// Output:
/// - Centred `Rect` no larger than `area`
pub(super) fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(4).min(max_w);
    let h = area.height.saturating_sub(2).min(max_h);
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

fn hints_for(app: &AppState) -> &'static str {
    if app.modal.is_open() {
        return match app.modal {
            Modal::LocationDenied {
                offer_settings: true,
                ..
            } => "Enter/Esc dismiss  s settings",
            _ => "Enter/Esc dismiss",
        };
    }
    match app.current_view {
        View::Home | View::Bio => "1-4/Tab pages  ↑↓ scroll  q quit",
        View::MapPage => "←↑↓→ pan  +/- zoom  n/p pin  Enter open  i itinerary  c centre  q quit",
        View::Desc => "←→ photos  Enter enlarge  ↑↓ scroll  Esc map  q quit",
        View::AmplifiedImage => "o open  Esc back  q quit",
        View::Settings => "↑↓ choose  Enter apply  q quit",
    }
}

/// Render the one-line key hint for the current view or modal.
pub(super) fn render_key_hints(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = Line::from(Span::styled(
        format!(" {}", hints_for(app)),
        Style::default().fg(th.subtext),
    ));
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.mantle)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_and_centred() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(area, 100, 100);
        assert_eq!((r.width, r.height), (36, 8));
        assert_eq!((r.x, r.y), (2, 1));
        let small = centered_rect(area, 10, 4);
        assert_eq!((small.x, small.y, small.width, small.height), (15, 3, 10, 4));
    }
}
