use chrono::{NaiveTime, Timelike};

use crate::error::AppError;

/// Parses a strict 24-hour `HH:MM` wall-clock time.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, AppError> {
    // chrono's %H also accepts single-digit hours; the schedule format does not.
    if value.len() != 5 {
        return Err(AppError::InvalidTime(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| AppError::InvalidTime(value.to_string()))
}

/// Minutes since midnight, the comparable form of a time-of-day.
pub fn to_minutes(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

/// Half-open interval overlap: `[18:00, 19:00)` and `[19:00, 20:00)` merely
/// touch and do not overlap.
pub fn intervals_overlap(start_a: u16, end_a: u16, start_b: u16, end_b: u16) -> bool {
    start_a < end_b && start_b < end_a
}

/// Serde helper so booking times travel as `"HH:MM"` on the wire.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(serde::de::Error::custom)
    }
}
