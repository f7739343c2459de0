use chrono::{NaiveDate, NaiveDateTime};

use crate::modules::sport_events::core::event::Event;
use crate::modules::sport_events::core::ids::new_event_id;

/// Fixed reference instant for score timestamps.
pub fn kick_off() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(20, 0, 0))
        .expect("valid fixture date")
}

pub fn make_event(
    match_title: impl Into<String>,
    home_team_name: impl Into<String>,
    away_team_name: impl Into<String>,
) -> Event {
    Event::new(new_event_id(), match_title, home_team_name, away_team_name)
}
