//! UI module for rendering the TUI

mod components;
mod footer;
mod layout;
mod newsletter;
mod page;

pub use layout::page_viewport_height;
pub use page::{control_at, page_height};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (page_area, status_area) = layout::create_layout(frame.area());

    page::draw(frame, page_area, app);
    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FooterConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    fn draw_app(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.update_viewport(80, page_viewport_height(24));
        terminal.draw(|frame| draw(frame, app)).unwrap();
        screen_text(&terminal)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
    }

    #[test]
    fn test_page_top_shows_body_not_footer() {
        let mut app = App::new(FooterConfig::default());
        let out = draw_app(&mut app);
        assert!(out.contains("Welcome to TaskFlow"));
        assert!(!out.contains("Stay in the loop"));
    }

    #[test]
    fn test_scrolled_to_bottom_shows_footer() {
        let mut app = App::new(FooterConfig::default());
        app.update_viewport(80, page_viewport_height(24));
        app.state.viewport.scroll_to_bottom();
        let out = draw_app(&mut app);
        assert!(out.contains("Stay in the loop"));
        assert!(out.contains("Back to Top"));
    }

    #[test]
    fn test_error_then_thanks_end_to_end() {
        let mut app = App::new(FooterConfig::default());
        app.update_viewport(80, page_viewport_height(24));
        app.state.viewport.scroll_to_bottom();

        type_text(&mut app, "abc");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        let out = draw_app(&mut app);
        assert!(out.contains("Please enter a valid email address"));

        app.handle_key(KeyEvent::new(KeyCode::Char('@'), KeyModifiers::NONE))
            .unwrap();
        let out = draw_app(&mut app);
        assert!(!out.contains("Please enter a valid email address"));

        type_text(&mut app, "b.com");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        let out = draw_app(&mut app);
        assert!(out.contains("Thanks for subscribing!"));
        assert!(!out.contains("Enter your email"));
    }
}
