use axum::response::IntoResponse;
use portfolio_contact::ContactForm;

use crate::content::{PROFILE, Profile};
use crate::template::{RenderContext, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub ctx: RenderContext,
    pub profile: &'a Profile,
    pub form: ContactForm,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(ctx: RenderContext, form: ContactForm) -> Self {
        Self {
            ctx,
            profile: &PROFILE,
            form,
        }
    }
}

/// Contact form fragment swapped in by twinspark
#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub ctx: RenderContext,
    pub form: ContactForm,
}

/// GET / - Portfolio page
///
/// `?theme=light|dark` and `?menu=true` select the render context.
pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::new(template.context, ContactForm::default()))
}

#[cfg(test)]
mod tests {
    use askama::Template as _;
    use portfolio_contact::ContactView;

    use super::*;

    #[test]
    fn test_submitting_form_disables_button() {
        let mut form = ContactForm::new("Ana", "ana@x.com", "Hi");
        form.set_submitting(true);

        let html = ContactFormTemplate {
            ctx: RenderContext::default(),
            form,
        }
        .render()
        .unwrap();

        assert!(html.contains(" disabled>Sending...</button>"));
        assert!(!html.contains("Send Message"));
    }
}
