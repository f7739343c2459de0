// ISO-8601 local date-time parsing for inbound JSON.
//
// Seconds and fractional seconds are optional, so `2024-06-01T20:00`,
// `2024-06-01T20:00:05` and `2024-06-01T20:00:05.250` are all accepted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, de::Error};

const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// For `#[serde(deserialize_with = "...")]` on `NaiveDateTime` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| {
        D::Error::custom(format!("invalid ISO-8601 local date-time: {raw:?}"))
    })
}
