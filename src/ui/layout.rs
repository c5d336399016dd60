//! Layout components (page area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, PASTE_SHORTCUT};
use crate::state::FooterFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the page and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Rows available to the page on a screen of `height` rows
pub fn page_viewport_height(height: u16) -> u16 {
    height.saturating_sub(1)
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.focus.label()),
        Style::default().fg(Color::Black).bg(Color::Magenta),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_focus_hints(app.state.focus, app.state.is_editing_email()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused control
fn get_focus_hints(focus: FooterFocus, editing: bool) -> String {
    if editing {
        return format!(
            "Tab:next  Enter:subscribe  {}:paste  {}:clear  ↑/↓:scroll",
            PASTE_SHORTCUT, CLEAR_SHORTCUT
        );
    }
    match focus {
        FooterFocus::EmailField | FooterFocus::SubscribeButton => {
            "Tab:next  Enter:subscribe  ↑/↓:scroll  t:top".to_string()
        }
        FooterFocus::BackToTop => "Tab:next  Enter:back to top  ↑/↓:scroll  End:bottom".to_string(),
    }
}
