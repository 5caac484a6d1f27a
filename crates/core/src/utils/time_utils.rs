//! Parsing of the date representations the service emits.
//!
//! Audit and version timestamps arrive as epoch milliseconds from the REST
//! rendering, and as display strings like `"Sep 12, 2016 12:01:57 PM"` from
//! older renderings. Both are accepted; display strings carry no zone and
//! are taken as UTC.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

const LEGACY_DISPLAY_FORMAT: &str = "%b %d, %Y %I:%M:%S %p";

/// Converts an epoch-millisecond timestamp to a UTC instant.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Parses any of the service's string date forms.
pub fn parse_service_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, LEGACY_DISPLAY_FORMAT) {
        return Some(Utc.from_utc_datetime(&naive));
    }
    // Some responses render the millisecond timestamp as a string.
    raw.parse::<i64>().ok().and_then(from_epoch_millis)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Millis(i64),
    Text(String),
}

/// Deserializes a required service date from either wire form.
pub fn deserialize_service_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawDate::deserialize(deserializer)? {
        RawDate::Millis(ms) => from_epoch_millis(ms)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
        RawDate::Text(s) => parse_service_date(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {s}"))),
    }
}

/// Deserializes an optional service date from either wire form.
pub fn deserialize_opt_service_date<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDate::Millis(ms)) => from_epoch_millis(ms)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
        Some(RawDate::Text(s)) => parse_service_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {s}"))),
    }
}
