//! Single-line text field rendering

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Field height in rows (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// What to draw for a text field
pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    /// Draws the field in the error color
    pub is_invalid: bool,
}

/// Draw a bordered single-line field with its label as the title
pub fn render_text_field(buf: &mut Buffer, area: Rect, field: &TextField) {
    let border_style = if field.is_invalid {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if field.is_active { "▌" } else { "" };

    let value = if field.value.is_empty() {
        Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(field.value, Style::default().fg(Color::White))
    };

    // Cursor sits after the typed text, before any placeholder
    let spans = if field.value.is_empty() {
        vec![Span::styled(cursor, Style::default().fg(Color::Cyan)), value]
    } else {
        vec![value, Span::styled(cursor, Style::default().fg(Color::Cyan))]
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(Line::from(spans))
        .block(block)
        .render(area, buf);
}
