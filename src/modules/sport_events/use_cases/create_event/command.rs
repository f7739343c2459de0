#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub match_title: String,
    pub home_team_name: String,
    pub away_team_name: String,
}
