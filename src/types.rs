use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PadEntry {
    pub name: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default)]
    pub members: Option<Members>,
}

impl PadEntry {
    /// Last visit as epoch milliseconds, `None` when it can't be read as a date.
    pub fn visited_at_ms(&self) -> Option<f64> {
        self.timestamp.as_ref().and_then(Timestamp::epoch_millis)
    }

    pub fn members_label(&self) -> String {
        self.members.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(f64),
    Text(String),
}

impl Timestamp {
    pub fn epoch_millis(&self) -> Option<f64> {
        match self {
            Timestamp::Epoch(ms) => ms.is_finite().then_some(*ms),
            Timestamp::Text(text) => parse_date_text(text.trim()),
        }
    }
}

// Shapes the browser's `Date` constructor reads and the storage writer may
// produce. Strings without an offset are local time, bare dates are UTC.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
// `Date.prototype.toString()`, once the "(zone name)" suffix is cut off.
const DATE_STRING_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

fn parse_date_text(text: &str) -> Option<f64> {
    let millis = |dt: DateTime<FixedOffset>| Some(dt.timestamp_millis() as f64);

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return millis(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return millis(dt);
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return millis(dt);
        }
    }
    let without_zone_name = text.split(" (").next().unwrap_or(text);
    if let Ok(dt) = DateTime::parse_from_str(without_zone_name, DATE_STRING_FORMAT) {
        return millis(dt);
    }
    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.timestamp_millis() as f64);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Members {
    Count(i64),
    Fraction(f64),
    Label(String),
    Other(serde_json::Value),
}

impl fmt::Display for Members {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Members::Count(n) => write!(f, "{n}"),
            Members::Fraction(n) => write!(f, "{n}"),
            Members::Label(label) => f.write_str(label),
            Members::Other(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> PadEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn rfc3339_timestamp() {
        let pad = entry(r#"{"name":"alpha","timestamp":"2024-01-01T10:00:00Z","members":2}"#);
        assert_eq!(pad.visited_at_ms(), Some(1_704_103_200_000.0));
        assert_eq!(pad.members_label(), "2");
    }

    #[test]
    fn offset_and_fraction() {
        let pad = entry(r#"{"name":"a","timestamp":"2024-01-01T12:00:00.500+02:00"}"#);
        assert_eq!(pad.visited_at_ms(), Some(1_704_103_200_500.0));
    }

    #[test]
    fn epoch_millis_number() {
        let pad = entry(r#"{"name":"a","timestamp":1704103200000}"#);
        assert_eq!(pad.visited_at_ms(), Some(1_704_103_200_000.0));
    }

    #[test]
    fn date_only_is_utc_midnight() {
        let pad = entry(r#"{"name":"a","timestamp":"2024-01-01"}"#);
        assert_eq!(pad.visited_at_ms(), Some(1_704_067_200_000.0));
    }

    #[test]
    fn local_date_time_parses() {
        let pad = entry(r#"{"name":"a","timestamp":"2024-01-01T10:00"}"#);
        assert!(pad.visited_at_ms().is_some());
    }

    #[test]
    fn space_separated_local_time_matches_t_separator() {
        let spaced = entry(r#"{"name":"a","timestamp":"2024-01-01 10:00:00"}"#);
        let with_t = entry(r#"{"name":"a","timestamp":"2024-01-01T10:00:00"}"#);
        assert!(spaced.visited_at_ms().is_some());
        assert_eq!(spaced.visited_at_ms(), with_t.visited_at_ms());
    }

    #[test]
    fn compact_and_spaced_offsets() {
        let compact = entry(r#"{"name":"a","timestamp":"2024-01-01T10:00:00+0000"}"#);
        assert_eq!(compact.visited_at_ms(), Some(1_704_103_200_000.0));
        let spaced = entry(r#"{"name":"a","timestamp":"2024-01-01 10:00:00+02:00"}"#);
        assert_eq!(spaced.visited_at_ms(), Some(1_704_096_000_000.0));
    }

    #[test]
    fn rfc2822_timestamp() {
        let pad = entry(r#"{"name":"a","timestamp":"Mon, 01 Jan 2024 10:00:00 GMT"}"#);
        assert_eq!(pad.visited_at_ms(), Some(1_704_103_200_000.0));
    }

    #[test]
    fn date_to_string_output() {
        let pad = entry(
            r#"{"name":"a","timestamp":"Mon Jan 01 2024 10:00:00 GMT+0000 (Coordinated Universal Time)"}"#,
        );
        assert_eq!(pad.visited_at_ms(), Some(1_704_103_200_000.0));
    }

    #[test]
    fn garbage_or_missing_timestamp_is_undated() {
        assert_eq!(entry(r#"{"name":"a","timestamp":"yesterday"}"#).visited_at_ms(), None);
        assert_eq!(entry(r#"{"name":"a"}"#).visited_at_ms(), None);
        assert_eq!(entry(r#"{"name":"a","timestamp":null}"#).visited_at_ms(), None);
    }

    #[test]
    fn members_displayed_as_is() {
        assert_eq!(entry(r#"{"name":"a","members":"3 people"}"#).members_label(), "3 people");
        assert_eq!(entry(r#"{"name":"a","members":1.5}"#).members_label(), "1.5");
        assert_eq!(entry(r#"{"name":"a"}"#).members_label(), "");
        assert_eq!(entry(r#"{"name":"a","members":true}"#).members_label(), "true");
    }
}
