use anyhow::Result;
use portfolio_contact::{
    ContactForm, ContactMessage, ContactView, HttpTransport, Notification, SubmissionHandler,
};

/// Terminal front end for a single submission
struct ConsoleView {
    form: ContactForm,
}

impl ContactView for ConsoleView {
    fn fields(&self) -> ContactMessage {
        self.form.fields()
    }

    fn set_submitting(&mut self, submitting: bool) {
        if submitting {
            eprintln!("Sending...");
        }
        self.form.set_submitting(submitting);
    }

    fn notify(&mut self, notification: Notification) {
        println!("{notification}");
        self.form.notify(notification);
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

/// Submit one contact message to `origin` from the terminal
///
/// Fails when the message was not sent, so scripts can rely on the exit status.
pub async fn submit(origin: &str, form: ContactForm) -> Result<()> {
    let transport = HttpTransport::for_origin(origin)?;
    tracing::debug!(endpoint = %transport.endpoint(), "Submitting contact message");

    let handler = SubmissionHandler::new(transport);
    let mut view = ConsoleView { form };

    let notification = handler.submit(&mut view).await;

    if !notification.is_success() {
        anyhow::bail!("contact message was not sent");
    }

    Ok(())
}
