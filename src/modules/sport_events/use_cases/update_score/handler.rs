use std::sync::Arc;

use crate::modules::sport_events::application::errors::ApplicationError;
use crate::modules::sport_events::core::ids::EventId;
use crate::modules::sport_events::core::ports::EventStore;
use crate::modules::sport_events::use_cases::update_score::command::UpdateScore;
use crate::modules::sport_events::use_cases::update_score::decide::decide_score_update;
use crate::modules::sport_events::use_cases::update_score::decision::{
    ScoreDecision, ScoreUpdateOutcome,
};
use crate::shared::infrastructure::keyed_locks::KeyedLocks;

pub struct UpdateScoreHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
    locks: KeyedLocks<EventId>,
}

impl<TEventStore> UpdateScoreHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self {
            event_store,
            locks: KeyedLocks::new(),
        }
    }

    /// Loads, decides and saves while holding the lock for `event_id`, so two
    /// updates of the same event never interleave. Other events are not blocked.
    pub async fn handle(
        &self,
        event_id: EventId,
        command: UpdateScore,
    ) -> Result<ScoreUpdateOutcome, ApplicationError> {
        let _guard = self.locks.lock(event_id).await;

        let event = self
            .event_store
            .find_by_id(event_id)
            .await?
            .ok_or(ApplicationError::NotFound(event_id))?;

        match decide_score_update(&event, &command) {
            ScoreDecision::Apply(updated) => {
                self.event_store.save(updated).await?;
                tracing::debug!(
                    %event_id,
                    home = command.home_team_score,
                    away = command.away_team_score,
                    valid_at = %command.score_valid_at_timestamp,
                    "score applied"
                );
                Ok(ScoreUpdateOutcome::Applied)
            }
            ScoreDecision::Stale => {
                tracing::debug!(
                    %event_id,
                    valid_at = %command.score_valid_at_timestamp,
                    stored = ?event.score_last_updated_timestamp,
                    "stale score update ignored"
                );
                Ok(ScoreUpdateOutcome::Stale)
            }
        }
    }
}
