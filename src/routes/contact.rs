use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use portfolio_contact::ContactForm;

use crate::routes::{AppState, ContactFormTemplate, IndexTemplate};
use crate::template::Template;

/// POST /contact - Contact form submission
///
/// Relays the form to `/api/contact` through the submission handler and
/// renders the outcome. twinspark requests get the form fragment back, plain
/// posts get the whole page. Fields are only cleared when the message was sent.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(mut form): Form<ContactForm>,
) -> impl IntoResponse {
    let notification = app_state.submitter.submit(&mut form).await;

    tracing::info!(notification = %notification, "Contact form submitted");

    if template.partial {
        return template.render(ContactFormTemplate {
            ctx: template.context,
            form,
        });
    }

    template.render(IndexTemplate::new(template.context, form))
}
