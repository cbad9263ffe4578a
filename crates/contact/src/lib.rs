//! Contact form submission for the portfolio site.
//!
//! A [`ContactForm`] holds what the visitor typed. [`SubmissionHandler::submit`]
//! turns one submit action into exactly one `POST /api/contact` and exactly one
//! [`Notification`], keeping the form's in-flight flag raised while the request
//! is outstanding.

mod form;
mod handler;
mod message;
mod transport;

pub use form::*;
pub use handler::*;
pub use message::*;
pub use transport::*;
