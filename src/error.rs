use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Inbox error: {0}")]
    InboxError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "status": "invalid",
                    "errors": errors,
                })),
            )
                .into_response(),
            AppError::InboxError(err) => {
                tracing::error!(err = %err, "Failed to deliver contact message");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": "error"})),
                )
                    .into_response()
            }
        }
    }
}
