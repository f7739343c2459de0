use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::sport_events::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

/// Missing names are stored as empty strings.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEventBody {
    pub match_title: String,
    pub home_team_name: String,
    pub away_team_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    pub event_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateEvent {
        match_title: body.match_title,
        home_team_name: body.home_team_name,
        away_team_name: body.away_team_name,
    };

    match state.create_event_handler.handle(command).await {
        Ok(event_id) => (
            StatusCode::CREATED,
            Json(CreateEventResponse {
                event_id: event_id.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "create event failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
