use crate::modules::sport_events::core::event::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreDecision {
    /// The update is not older than the stored score; holds the record to save.
    Apply(Event),
    /// A newer score is already stored; nothing to write.
    Stale,
}

/// What happened to an accepted update request. Both outcomes are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreUpdateOutcome {
    Applied,
    Stale,
}
