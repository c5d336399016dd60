//! Application state definitions

use super::subscription::{SubscriptionFormController, SubscriptionFormState};
use super::view_model::NewsletterView;
use super::viewport::PageViewport;
use tokio::sync::watch;

/// Focusable controls of the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterFocus {
    #[default]
    EmailField,
    SubscribeButton,
    BackToTop,
}

impl FooterFocus {
    /// Next control in tab order. Form controls are skipped once hidden.
    pub fn next(&self, form_visible: bool) -> Self {
        if !form_visible {
            return Self::BackToTop;
        }
        match self {
            Self::EmailField => Self::SubscribeButton,
            Self::SubscribeButton => Self::BackToTop,
            Self::BackToTop => Self::EmailField,
        }
    }

    /// Previous control in tab order
    pub fn prev(&self, form_visible: bool) -> Self {
        if !form_visible {
            return Self::BackToTop;
        }
        match self {
            Self::EmailField => Self::BackToTop,
            Self::SubscribeButton => Self::EmailField,
            Self::BackToTop => Self::SubscribeButton,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmailField => "Email",
            Self::SubscribeButton => "Subscribe",
            Self::BackToTop => "Back to Top",
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Newsletter form of the mounted footer
    pub form: SubscriptionFormController,
    /// Latest render-ready view of the form
    pub newsletter: NewsletterView,
    /// Snapshots published by the form controller
    form_snapshots: watch::Receiver<SubscriptionFormState>,
    /// Page scroll position
    pub viewport: PageViewport,
    /// Focused footer control
    pub focus: FooterFocus,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        let form = SubscriptionFormController::new();
        let form_snapshots = form.subscribe();
        let newsletter = NewsletterView::from_state(form.state());
        Self {
            form,
            newsletter,
            form_snapshots,
            viewport: PageViewport::new(),
            focus: FooterFocus::default(),
            status_message: None,
        }
    }

    /// Re-derive the newsletter view if the form published a new snapshot.
    /// Returns true when the view changed.
    pub fn sync_form_view(&mut self) -> bool {
        if !self.form_snapshots.has_changed().unwrap_or(false) {
            return false;
        }
        let snapshot = self.form_snapshots.borrow_and_update();
        self.newsletter = NewsletterView::from_state(&snapshot);
        drop(snapshot);

        if !self.newsletter.show_form {
            self.focus = FooterFocus::BackToTop;
        }
        true
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.newsletter.show_form);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.newsletter.show_form);
    }

    /// Whether key presses go into the email field
    pub fn is_editing_email(&self) -> bool {
        self.focus == FooterFocus::EmailField && self.newsletter.show_form
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
