//! Newsletter subscription form state and its controller

use super::validation::{self, ValidationOutcome};
use std::fmt;
use tokio::sync::watch;
use uuid::Uuid;

/// Identifies one mount of the footer widget in log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(Uuid);

impl MountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phase of the form, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing typed, no error, not submitted
    Neutral,
    /// Some text typed, no error
    Editing,
    /// The last submit failed validation and nothing was edited since
    Error,
    /// Subscribed; no further transitions
    Submitted,
}

/// Mutable record behind the newsletter form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionFormState {
    pub email_input: String,
    pub error_message: Option<String>,
    pub submitted: bool,
}

impl SubscriptionFormState {
    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else if self.error_message.is_some() {
            FormPhase::Error
        } else if self.email_input.is_empty() {
            FormPhase::Neutral
        } else {
            FormPhase::Editing
        }
    }
}

/// Owns the form state of one widget mount and applies the two transitions.
///
/// Every change is published as a snapshot on a watch channel so renderers
/// can observe the form without touching the controller.
#[derive(Debug)]
pub struct SubscriptionFormController {
    mount_id: MountId,
    state: SubscriptionFormState,
    snapshots: watch::Sender<SubscriptionFormState>,
}

impl SubscriptionFormController {
    /// Mount a fresh form with default state
    pub fn new() -> Self {
        let state = SubscriptionFormState::default();
        let (snapshots, _) = watch::channel(state.clone());
        let mount_id = MountId::new();
        tracing::debug!(%mount_id, "subscription form mounted");
        Self {
            mount_id,
            state,
            snapshots,
        }
    }

    pub fn mount_id(&self) -> MountId {
        self.mount_id
    }

    /// Current state
    pub fn state(&self) -> &SubscriptionFormState {
        &self.state
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<SubscriptionFormState> {
        self.snapshots.subscribe()
    }

    /// The email field changed. Clears any error without revalidating.
    pub fn on_email_changed(&mut self, text: impl Into<String>) {
        if self.state.submitted {
            tracing::debug!(mount_id = %self.mount_id, "ignoring edit on submitted form");
            return;
        }

        self.state.email_input = text.into();
        self.state.error_message = None;
        self.publish();
    }

    /// The form was submitted.
    ///
    /// Returns the validation outcome of this attempt, or `None` when the
    /// form had already been submitted and the request was ignored.
    pub fn on_submit_requested(&mut self) -> Option<ValidationOutcome> {
        if self.state.submitted {
            tracing::debug!(mount_id = %self.mount_id, "ignoring submit on submitted form");
            return None;
        }

        self.state.error_message = None;
        let outcome = validation::validate(&self.state.email_input);

        match outcome {
            ValidationOutcome::Invalid(reason) => {
                tracing::debug!(mount_id = %self.mount_id, %reason, "subscription rejected");
                self.state.error_message = Some(reason.to_string());
            }
            ValidationOutcome::Valid => {
                tracing::info!(mount_id = %self.mount_id, "newsletter subscription accepted");
                self.state.submitted = true;
            }
        }

        self.publish();
        Some(outcome)
    }

    fn publish(&self) {
        tracing::trace!(mount_id = %self.mount_id, phase = ?self.state.phase(), "form state changed");
        self.snapshots.send_if_modified(|snapshot| {
            if *snapshot == self.state {
                false
            } else {
                *snapshot = self.state.clone();
                true
            }
        });
    }
}

impl Default for SubscriptionFormController {
    fn default() -> Self {
        Self::new()
    }
}
