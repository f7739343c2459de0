use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::sport_events::application::errors::ApplicationError;
use crate::modules::sport_events::use_cases::update_score::command::UpdateScore;
use crate::shared::core::local_date_time;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScoreBody {
    pub home_team_score: i32,
    pub away_team_score: i32,
    #[serde(deserialize_with = "local_date_time::deserialize")]
    pub score_valid_at_timestamp: NaiveDateTime,
}

/// Answers 200 for both applied and stale updates so a score feed can
/// redeliver or reorder without special handling.
pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateScoreBody>, JsonRejection>,
) -> impl IntoResponse {
    let Path(event_id) = match event_id {
        Ok(p) => p,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateScore {
        home_team_score: body.home_team_score,
        away_team_score: body.away_team_score,
        score_valid_at_timestamp: body.score_valid_at_timestamp,
    };

    match state.update_score_handler.handle(event_id, command).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(ApplicationError::NotFound(_)) => {
            tracing::warn!(%event_id, "score update for unknown event");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            tracing::error!(%event_id, error = %err, "score update failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
