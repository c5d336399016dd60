//! Newsletter sign-up section of the footer

use super::components::{render_button, render_text_field, TextField, FIELD_HEIGHT};
use crate::state::{FooterFocus, NewsletterView, Role};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::rc::Rc;

/// Rows taken by the section: heading, field row, message line
pub const NEWSLETTER_HEIGHT: u16 = 1 + FIELD_HEIGHT + 1;

/// Widest the form gets before it is centered
const FORM_MAX_WIDTH: u16 = 56;
const SUBSCRIBE_WIDTH: u16 = 15;

fn message_style(role: Role) -> Style {
    match role {
        Role::Alert => Style::default().fg(Color::LightRed),
        Role::Status => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn section_rows(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Heading
            Constraint::Length(FIELD_HEIGHT), // Field and button
            Constraint::Length(1),            // Alert
        ])
        .split(area)
}

/// Email field and Subscribe button areas within the section
pub fn form_areas(area: Rect) -> (Rect, Rect) {
    let field_row = section_rows(area)[1];
    let form_width = area.width.min(FORM_MAX_WIDTH);
    let form_area = Rect {
        x: area.x + (area.width - form_width) / 2,
        width: form_width,
        ..field_row
    };
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                  // Email field
            Constraint::Length(SUBSCRIBE_WIDTH), // Subscribe
        ])
        .split(form_area);

    (row[0], row[1])
}

/// Draw the heading and either the form or the confirmation message
pub fn render(buf: &mut Buffer, area: Rect, view: &NewsletterView, focus: FooterFocus) {
    let chunks = section_rows(area);

    Paragraph::new(Span::styled(
        view.heading,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    if let Some(status) = &view.status {
        // Confirmation takes the place of the form
        Paragraph::new(Line::from(Span::styled(
            status.message,
            message_style(status.role),
        )))
        .alignment(Alignment::Center)
        .render(chunks[1].inner(Margin::new(0, 1)), buf);
        return;
    }

    let (field_area, button_area) = form_areas(area);

    render_text_field(
        buf,
        field_area,
        &TextField {
            label: view.input_label,
            value: &view.input_value,
            placeholder: view.placeholder,
            is_active: focus == FooterFocus::EmailField,
            is_invalid: view.input_invalid,
        },
    );
    render_button(
        buf,
        button_area,
        view.submit_label,
        focus == FooterFocus::SubscribeButton,
        Color::Magenta,
    );

    if let Some(alert) = &view.alert {
        Paragraph::new(Line::from(vec![
            Span::styled("! ", message_style(alert.role).add_modifier(Modifier::BOLD)),
            Span::styled(alert.message.as_str(), message_style(alert.role)),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);
    }
}
