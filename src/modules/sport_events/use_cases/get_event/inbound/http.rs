use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::sport_events::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(event_id) = match event_id {
        Ok(p) => p,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.get_event_handler.handle(event_id).await {
        Ok(event) => Json(event).into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::error!(%event_id, error = %err, "get event failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
