//! Lenient ISO-8601 timestamp parsing for request bodies.
//!
//! Clients may send timestamps with an offset (`2025-01-01T09:00:00+02:00`),
//! without one (`2025-01-01T09:00:00`) or as a bare date (`2025-01-01`).
//! Values without an offset are taken to be UTC; a bare date means midnight UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer};

/// Serde `deserialize_with` adapter for [`parse_utc`].
pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse_utc(&value).ok_or_else(|| {
        de::Error::custom(format!("invalid ISO-8601 timestamp: {}", value))
    })
}

/// Parses an ISO-8601 timestamp into a UTC instant.
///
/// Returns `None` if `value` is neither an offset timestamp, a local timestamp
/// nor a calendar date.
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date_time) = value.parse::<DateTime<FixedOffset>>() {
        return Some(date_time.with_timezone(&Utc));
    }

    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }

    value
        .parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
