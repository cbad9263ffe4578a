use serde::Deserialize;
use strum::Display;

use crate::ContactMessage;

/// In-flight flag of a contact form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Outcome shown to the visitor once a submission settles.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    #[strum(to_string = "Message sent!")]
    Sent,
    #[strum(to_string = "Failed to send message.")]
    Rejected,
    #[strum(to_string = "An error occurred. Please try again.")]
    Failed,
}

impl Notification {
    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Sent)
    }

    /// Style hint for renderers.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::Sent => "success",
            Notification::Rejected | Notification::Failed => "error",
        }
    }
}

/// The UI side of a submission.
///
/// The handler reads the field values through it, raises and lowers the
/// in-flight flag, reports the outcome and clears the fields on success.
pub trait ContactView {
    fn fields(&self) -> ContactMessage;

    fn set_submitting(&mut self, submitting: bool);

    fn notify(&mut self, notification: Notification);

    fn reset(&mut self);
}

/// Form state as held by a page or a terminal session.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(skip)]
    state: SubmissionState,
    #[serde(skip)]
    notification: Option<Notification>,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn message(&self) -> ContactMessage {
        ContactMessage::new(&self.name, &self.email, &self.message)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Last notification shown, if any.
    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

impl ContactView for ContactForm {
    fn fields(&self) -> ContactMessage {
        self.message()
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.state = if submitting {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        };
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn reset(&mut self) {
        self.clear();
    }
}
