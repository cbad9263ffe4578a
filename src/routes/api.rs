use axum::{Json, extract::State, response::IntoResponse};
use portfolio_contact::ContactMessage;
use serde_json::json;
use validator::Validate;

use crate::{error::AppError, routes::AppState};

/// POST /api/contact - Receives a contact message as JSON
///
/// 200 once the inbox accepted the message, 422 on invalid fields,
/// 500 when the inbox is unavailable.
pub async fn contact(
    State(app_state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<impl IntoResponse, AppError> {
    message.validate()?;

    app_state.inbox.receive(&message).await?;

    Ok(Json(json!({"status": "sent"})))
}
