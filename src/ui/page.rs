//! Scrollable page shell with the footer at its end
//!
//! The whole page is rendered into an offscreen buffer as tall as its content,
//! then the rows under the viewport are copied onto the frame.

use super::footer::{self, Footer, FOOTER_HEIGHT};
use crate::app::App;
use crate::state::FooterFocus;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

/// Total page height for a body of `body_lines` rows
pub fn page_height(body_lines: u16) -> u16 {
    body_lines.saturating_add(FOOTER_HEIGHT)
}

fn footer_area(body_lines: u16, width: u16) -> Rect {
    Rect::new(0, body_lines, width, FOOTER_HEIGHT)
}

/// Footer control at a page position (column, row counted from the page top)
pub fn control_at(
    body_lines: u16,
    width: u16,
    position: Position,
    form_visible: bool,
) -> Option<FooterFocus> {
    footer::control_at(footer_area(body_lines, width), position, form_visible)
}

/// Filler body standing in for the page the footer is embedded in
fn body_lines(brand: &str, count: u16) -> Vec<Line<'static>> {
    (0..count)
        .map(|row| match row {
            0 => Line::from(Span::styled(
                format!("Welcome to {brand}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            1 => Line::from(Span::styled(
                "Scroll down to reach the footer.",
                Style::default().fg(Color::Gray),
            )),
            n if n % 6 == 3 => Line::from(Span::styled(
                format!("Section {}", n / 6 + 1),
                Style::default().fg(Color::Cyan),
            )),
            _ => Line::from(Span::styled(
                "  ·  ·  ·",
                Style::default().fg(Color::DarkGray),
            )),
        })
        .collect()
}

/// Render the complete page at full height
fn render_page(app: &App, width: u16) -> Buffer {
    let body = app.config.page_lines();
    let area = Rect::new(0, 0, width, page_height(body));
    let mut buf = Buffer::empty(area);

    let body_area = Rect {
        height: body,
        ..area
    };
    Paragraph::new(body_lines(app.config.brand_name(), body)).render(body_area, &mut buf);

    Footer {
        config: &app.config,
        newsletter: &app.state.newsletter,
        focus: app.state.focus,
    }
    .render(footer_area(body, width), &mut buf);

    buf
}

/// Draw the visible window of the page into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let page = render_page(app, area.width);
    let offset = app.state.viewport.offset();
    let target = frame.buffer_mut();

    for row in 0..area.height {
        let src_y = offset.saturating_add(row);
        if src_y >= page.area.height {
            break;
        }
        for col in 0..area.width {
            if let (Some(src), Some(dst)) = (
                page.cell((col, src_y)),
                target.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}
