use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::Activity;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Connector webhook. Message activities are always acknowledged with 200;
/// the bot reports its own failures inside the conversation.
#[tracing::instrument(skip(state, activity), fields(activity_id = activity.id.as_deref()))]
pub async fn messages_handler(
    State(state): State<AppState>,
    Json(activity): Json<Activity>,
) -> impl IntoResponse {
    if let Some(text) = activity.text.as_deref() {
        tracing::debug!(text = %sanitize_for_log(text), "Activity received");
    }

    match state.bot_service.handle_activity(&activity).await {
        Ok(reply) => {
            tracing::debug!(replied = reply.is_some(), "Activity handled");
            StatusCode::OK.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "System activity failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Activity handling failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
