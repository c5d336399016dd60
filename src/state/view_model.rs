//! What the renderer reads from the subscription form
//!
//! The renderer never inspects `SubscriptionFormState` directly; it derives a
//! `NewsletterView` from each snapshot and draws exactly that.

use super::subscription::SubscriptionFormState;

pub const NEWSLETTER_HEADING: &str = "Stay in the loop";
pub const EMAIL_LABEL: &str = "Email address";
pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
pub const SUBSCRIBE_LABEL: &str = "Subscribe";
pub const THANK_YOU_MESSAGE: &str = "Thanks for subscribing!";

/// Identifier of the error alert, referenced by the email input
pub const EMAIL_ERROR_ID: &str = "email-error";

/// Accessibility role of a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Interrupts the user (validation failures)
    Alert,
    /// Polite announcement (confirmation)
    Status,
}

/// Inline validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: &'static str,
    pub role: Role,
    pub message: String,
}

/// Message that replaces the form once subscribed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub role: Role,
    pub message: &'static str,
}

/// Render-ready view of the newsletter form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterView {
    pub heading: &'static str,
    /// Whether the input and submit control are shown at all
    pub show_form: bool,
    pub input_value: String,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
    pub input_invalid: bool,
    /// Id of the element describing the input, set while an error shows
    pub input_described_by: Option<&'static str>,
    pub alert: Option<Alert>,
    pub status: Option<StatusMessage>,
}

impl NewsletterView {
    pub fn from_state(state: &SubscriptionFormState) -> Self {
        if state.submitted {
            return Self {
                heading: NEWSLETTER_HEADING,
                show_form: false,
                input_value: String::new(),
                input_label: EMAIL_LABEL,
                placeholder: EMAIL_PLACEHOLDER,
                submit_label: SUBSCRIBE_LABEL,
                input_invalid: false,
                input_described_by: None,
                alert: None,
                status: Some(StatusMessage {
                    role: Role::Status,
                    message: THANK_YOU_MESSAGE,
                }),
            };
        }

        let alert = state.error_message.as_ref().map(|message| Alert {
            id: EMAIL_ERROR_ID,
            role: Role::Alert,
            message: message.clone(),
        });

        Self {
            heading: NEWSLETTER_HEADING,
            show_form: true,
            input_value: state.email_input.clone(),
            input_label: EMAIL_LABEL,
            placeholder: EMAIL_PLACEHOLDER,
            submit_label: SUBSCRIBE_LABEL,
            input_invalid: alert.is_some(),
            input_described_by: alert.as_ref().map(|a| a.id),
            alert,
            status: None,
        }
    }
}
