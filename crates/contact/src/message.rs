use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fixed path of the endpoint that receives contact messages.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// One visitor message, as sent on the wire.
///
/// Built from the form right before sending and dropped once the request
/// settles. The length and email rules are only checked by the receiving
/// endpoint; the submitting side trusts the input controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}
