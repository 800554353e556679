use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph, Wrap,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::map::{MarkerIcon, RouteColor};
use crate::state::AppState;
use crate::theme::{Theme, theme};

use super::helpers::centered_rect;

/// Pin glyph drawn for landmarks.
const PIN: &str = "●";
/// Glyph for the selected landmark.
const SELECTED_PIN: &str = "◉";
/// Glyph for the user position.
const USER_PIN: &str = "◆";

const fn icon_color(th: &Theme, icon: MarkerIcon) -> Color {
    match icon {
        MarkerIcon::Green => th.green,
        MarkerIcon::Yellow => th.yellow,
        MarkerIcon::User => th.red,
    }
}

const fn route_color(th: &Theme, color: RouteColor) -> Color {
    match color {
        RouteColor::Green => th.green,
        RouteColor::Yellow => th.yellow,
    }
}

/// A pin resolved for drawing, owned so the paint closure borrows nothing from `app`.
struct PinShape {
    x: f64,
    y: f64,
    glyph: &'static str,
    color: Color,
    bold: bool,
}

/// What: Render the map page.
///
/// Inputs:
/// - `app`: Application state; the viewport projection is synced to the canvas area
/// - `area`: Body area
///
/// Details:
/// - Routes are drawn first, landmark pins above them and the user marker last.
/// - A pending size invalidation is resolved here, on the first frame the map is visible.
/// - The selected pin's popup is drawn as a small box near the bottom of the map.
pub(super) fn render_map(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.page_text.map.title),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay));
    let inner = block.inner(area);

    let Some(markers) = app.markers.as_mut() else {
        f.render_widget(block, area);
        return;
    };
    if markers.viewport_mut().sync_size(inner.width, inner.height) {
        tracing::trace!(width = inner.width, height = inner.height, "map projection recomputed");
    }

    let routes: Vec<(Vec<(f64, f64)>, Color)> = markers
        .visible_routes()
        .iter()
        .map(|r| {
            (
                r.points.iter().map(|p| (p.lng, p.lat)).collect(),
                route_color(&th, r.color),
            )
        })
        .collect();
    let selected_id = markers.selected_marker().and_then(|m| m.poi_id);
    let mut pins: Vec<PinShape> = markers
        .visible_markers()
        .map(|m| {
            let is_selected = m.poi_id.is_some() && m.poi_id == selected_id;
            PinShape {
                x: m.coords.lng,
                y: m.coords.lat,
                glyph: if is_selected { SELECTED_PIN } else { PIN },
                color: if is_selected {
                    th.accent
                } else {
                    icon_color(&th, m.icon)
                },
                bold: is_selected,
            }
        })
        .collect();
    if let Some(user) = markers.user_marker() {
        pins.push(PinShape {
            x: user.coords.lng,
            y: user.coords.lat,
            glyph: USER_PIN,
            color: icon_color(&th, user.icon),
            bold: true,
        });
    }
    let popup = if markers.popup_open() {
        markers.selected_marker().map(|m| m.popup.title.clone())
    } else {
        None
    };
    let viewport = markers.viewport();

    let canvas = Canvas::default()
        .block(block)
        .background_color(th.base)
        .marker(symbols::Marker::Braille)
        .x_bounds(viewport.x_bounds())
        .y_bounds(viewport.y_bounds())
        .paint(|ctx| {
            for (points, color) in &routes {
                for pair in points.windows(2) {
                    ctx.draw(&CanvasLine::new(
                        pair[0].0, pair[0].1, pair[1].0, pair[1].1, *color,
                    ));
                }
            }
            ctx.layer();
            for pin in &pins {
                let mut style = Style::default().fg(pin.color);
                if pin.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                ctx.print(pin.x, pin.y, Line::from(Span::styled(pin.glyph, style)));
            }
        });
    f.render_widget(canvas, area);

    if let Some(title) = popup {
        render_popup(f, &th, &title, inner);
    }
}

fn render_popup(f: &mut Frame, th: &Theme, title: &str, map_area: Rect) {
    let width = u16::try_from(unicode_width::UnicodeWidthStr::width(title))
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .max(20);
    let mut rect = centered_rect(map_area, width, 4);
    rect.y = map_area.y + map_area.height.saturating_sub(rect.height + 1);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Enter ▶", Style::default().fg(th.subtext))),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(th.accent))
                    .style(Style::default().bg(th.mantle)),
            ),
        rect,
    );
}
