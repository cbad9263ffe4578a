use crate::{ContactTransport, ContactView, Notification};

/// Turns a submit action into one delivery and one notification.
#[derive(Clone, Debug)]
pub struct SubmissionHandler<T> {
    transport: T,
}

impl<T: ContactTransport> SubmissionHandler<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submits the view's current fields.
    ///
    /// The in-flight flag is raised before the request and lowered once it
    /// settles, whatever the outcome. Fields are cleared only on a 2xx answer.
    /// Nothing is retried. Returns the notification that was shown.
    pub async fn submit<V: ContactView + Send>(&self, view: &mut V) -> Notification {
        view.set_submitting(true);

        let message = view.fields();

        let notification = match self.transport.deliver(&message).await {
            Ok(status) if status.is_success() => Notification::Sent,
            Ok(status) => {
                tracing::debug!(status = status.as_u16(), "contact message rejected");
                Notification::Rejected
            }
            Err(err) => {
                tracing::debug!(err = %err, "contact message not delivered");
                Notification::Failed
            }
        };

        view.notify(notification);

        if notification.is_success() {
            view.reset();
        }

        view.set_submitting(false);

        notification
    }
}
