use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_events_handler.handle().await {
        Ok(events) => Json(events).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "list events failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
