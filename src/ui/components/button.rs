//! Button component for TUI

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button with centered label
pub fn render_button(buf: &mut Buffer, area: Rect, label: &str, is_focused: bool, accent: Color) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(accent)
    };

    let text_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(format!(" {label} "))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}
