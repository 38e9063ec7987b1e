use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// `2025-01-01T08:30:00.000Z`: UTC, always three fractional digits, `Z` offset.
pub fn format_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` adapter for [`format_millis`].
pub fn serialize_millis<S>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format_millis(at))
}
