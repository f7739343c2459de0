use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateScore {
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub score_valid_at_timestamp: NaiveDateTime,
}
