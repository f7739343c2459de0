use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::sport_events::use_cases::create_event::inbound::http as create_http;
use crate::modules::sport_events::use_cases::get_event::inbound::http as get_http;
use crate::modules::sport_events::use_cases::list_events::inbound::http as list_http;
use crate::modules::sport_events::use_cases::update_score::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/event", get(list_http::handle).post(create_http::handle))
        .route(
            "/event/{event_id}",
            get(get_http::handle).put(update_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
