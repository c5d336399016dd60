//! Application state and core logic

use crate::config::FooterConfig;
use crate::platform::PASTE_MODIFIER;
use crate::state::{AppState, FooterFocus, ScrollController};
use crate::ui;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Footer content configuration
    pub config: FooterConfig,
    /// Whether the app should quit
    quit: bool,
    /// Rows of page visible on screen
    viewport_height: u16,
    /// Columns of the page area
    viewport_width: u16,
}

impl App {
    /// Create a new App instance with a freshly mounted footer
    pub fn new(config: FooterConfig) -> Self {
        let state = AppState::new();
        tracing::info!(mount_id = %state.form.mount_id(), "footer mounted");
        Self {
            state,
            config,
            quit: false,
            viewport_height: 0,
            viewport_width: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Resize the viewport to the screen and advance any scroll animation
    pub fn update_viewport(&mut self, viewport_width: u16, viewport_height: u16) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        let page_height = ui::page_height(self.config.page_lines());
        self.state
            .viewport
            .set_dimensions(page_height, viewport_height);
        self.state.viewport.tick();
    }

    /// Whether the render loop should poll at animation rate
    pub fn is_animating(&self) -> bool {
        self.state.viewport.is_animating()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            self.quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.state.focus_next();
                self.state.viewport.scroll_to_bottom();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.focus_prev();
                self.state.viewport.scroll_to_bottom();
                return Ok(());
            }
            KeyCode::Up => return self.scroll_by(-1),
            KeyCode::Down => return self.scroll_by(1),
            KeyCode::PageUp => return self.scroll_by(-(self.page_step() as i32)),
            KeyCode::PageDown => return self.scroll_by(self.page_step() as i32),
            _ => {}
        }

        if self.state.is_editing_email() {
            self.handle_email_key(key);
        } else {
            self.handle_footer_key(key);
        }

        self.state.sync_form_view();
        Ok(())
    }

    /// Keys while the email field has focus
    fn handle_email_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char('v') if key.modifiers.contains(PASTE_MODIFIER) => {
                self.paste_into_email()
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.on_email_changed(String::new());
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::ALT) =>
            {
                let mut text = self.state.form.state().email_input.clone();
                text.push(c);
                self.state.form.on_email_changed(text);
            }
            KeyCode::Backspace => {
                let mut text = self.state.form.state().email_input.clone();
                text.pop();
                self.state.form.on_email_changed(text);
            }
            _ => {}
        }
    }

    /// Keys while a footer button has focus
    fn handle_footer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.focus {
                FooterFocus::SubscribeButton => self.submit(),
                FooterFocus::BackToTop => self.scroll_to_top(),
                FooterFocus::EmailField => {}
            },
            KeyCode::Home | KeyCode::Char('t') => self.scroll_to_top(),
            KeyCode::End => self.state.viewport.scroll_to_bottom(),
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
                self.state.sync_form_view();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Activate the footer control under a screen cell, if any
    fn handle_click(&mut self, column: u16, row: u16) {
        // Status bar sits below the page
        if row >= self.viewport_height || column >= self.viewport_width {
            return;
        }

        let page_row = self.state.viewport.offset().saturating_add(row);
        let Some(control) = ui::control_at(
            self.config.page_lines(),
            self.viewport_width,
            Position::new(column, page_row),
            self.state.newsletter.show_form,
        ) else {
            return;
        };

        self.state.status_message = None;
        self.state.focus = control;
        match control {
            FooterFocus::EmailField => {}
            FooterFocus::SubscribeButton => self.submit(),
            FooterFocus::BackToTop => self.scroll_to_top(),
        }
    }

    fn page_step(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }

    fn scroll_by(&mut self, rows: i32) -> Result<()> {
        self.state.viewport.scroll_by(rows);
        Ok(())
    }

    fn scroll_to_top(&mut self) {
        ScrollController::scroll_to_top(Some(&mut self.state.viewport));
    }

    fn submit(&mut self) {
        let outcome = self.state.form.on_submit_requested();
        if outcome.is_some_and(|o| o.is_valid()) {
            self.state.status_message = Some("Subscribed to the newsletter".to_string());
        }
    }

    fn paste_into_email(&mut self) {
        match self.read_clipboard() {
            Ok(pasted) => {
                let mut text = self.state.form.state().email_input.clone();
                text.extend(pasted.chars().filter(|c| !matches!(c, '\r' | '\n')));
                self.state.form.on_email_changed(text);
            }
            Err(err) => {
                tracing::warn!("clipboard paste failed: {err}");
                self.state.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn read_clipboard(&self) -> Result<String> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        Ok(clipboard.get_text()?)
    }
}
