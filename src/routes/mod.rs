use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use portfolio_contact::{ContactTransport, SubmissionHandler};

use crate::{
    assets::AssetsService,
    content::PROFILE,
    email::Inbox,
    template::{NotFoundTemplate, Template},
};

mod api;
mod contact;
mod health;
mod index;

pub use index::{ContactFormTemplate, IndexTemplate};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub submitter: SubmissionHandler<Arc<dyn ContactTransport>>,
    pub inbox: Arc<dyn Inbox>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            ctx: template.context,
            profile: &PROFILE,
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/api/contact", post(api::contact))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
