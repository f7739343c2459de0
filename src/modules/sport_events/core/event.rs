use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::modules::sport_events::core::ids::EventId;

/// A sport event together with its latest accepted score.
///
/// `score_last_updated_timestamp` is `None` until the first score update is
/// accepted, and afterwards always holds the `valid_at` of the last accepted
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: EventId,
    pub match_title: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub score_last_updated_timestamp: Option<NaiveDateTime>,
}

impl Event {
    pub fn new(
        event_id: EventId,
        match_title: impl Into<String>,
        home_team_name: impl Into<String>,
        away_team_name: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            match_title: match_title.into(),
            home_team_name: home_team_name.into(),
            away_team_name: away_team_name.into(),
            home_team_score: 0,
            away_team_score: 0,
            score_last_updated_timestamp: None,
        }
    }
}
