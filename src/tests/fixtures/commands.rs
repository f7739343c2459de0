use chrono::NaiveDateTime;

use crate::modules::sport_events::use_cases::create_event::command::CreateEvent;
use crate::modules::sport_events::use_cases::update_score::command::UpdateScore;
use crate::tests::fixtures::events::kick_off;

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateEvent {
                match_title: "World Cup".to_string(),
                home_team_name: "England".to_string(),
                away_team_name: "France".to_string(),
            },
        }
    }

    pub fn match_title(mut self, v: impl Into<String>) -> Self {
        self.inner.match_title = v.into();
        self
    }

    pub fn home_team_name(mut self, v: impl Into<String>) -> Self {
        self.inner.home_team_name = v.into();
        self
    }

    pub fn away_team_name(mut self, v: impl Into<String>) -> Self {
        self.inner.away_team_name = v.into();
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

pub struct UpdateScoreBuilder {
    inner: UpdateScore,
}

impl Default for UpdateScoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UpdateScoreBuilder {
    pub fn new() -> Self {
        Self {
            inner: UpdateScore {
                home_team_score: 1,
                away_team_score: 0,
                score_valid_at_timestamp: kick_off(),
            },
        }
    }

    pub fn home_team_score(mut self, v: i32) -> Self {
        self.inner.home_team_score = v;
        self
    }

    pub fn away_team_score(mut self, v: i32) -> Self {
        self.inner.away_team_score = v;
        self
    }

    pub fn valid_at(mut self, v: NaiveDateTime) -> Self {
        self.inner.score_valid_at_timestamp = v;
        self
    }

    pub fn build(self) -> UpdateScore {
        self.inner
    }
}
