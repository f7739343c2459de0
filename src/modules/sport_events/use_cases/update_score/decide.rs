use crate::modules::sport_events::core::event::Event;
use crate::modules::sport_events::use_cases::update_score::{
    command::UpdateScore, decision::ScoreDecision,
};

/// Last valid timestamp wins. Only a strictly newer stored timestamp rejects
/// the update, so a redelivered update with the same timestamp applies again.
pub fn decide_score_update(event: &Event, command: &UpdateScore) -> ScoreDecision {
    match event.score_last_updated_timestamp {
        Some(stored) if stored > command.score_valid_at_timestamp => ScoreDecision::Stale,
        _ => ScoreDecision::Apply(Event {
            home_team_score: command.home_team_score,
            away_team_score: command.away_team_score,
            score_last_updated_timestamp: Some(command.score_valid_at_timestamp),
            ..event.clone()
        }),
    }
}
