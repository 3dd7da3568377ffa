//! Departure-time formatting for the detail view.
//!
//! The API sends an ISO-8601 timestamp; the detail view only shows the local
//! `HH:MM` part of it.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

pub const INVALID_DATE: &str = "Invalid Date";

fn time_of_day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Only the time that starts at the first colon counts.
        Regex::new(r"^[^:]*([0-2]\d:[0-5]\d).*$").expect("static regex")
    })
}

/// Returns the first `HH:MM` found at the first colon of `s`, or `s` unchanged.
pub fn extract_time_of_day(s: &str) -> String {
    match time_of_day_pattern().captures(s).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str().to_string(),
        None => s.to_string(),
    }
}

/// Formats a raw departure timestamp as a local time of day.
pub fn format_departure(raw: &str) -> String {
    format_departure_in(raw, &Local)
}

pub fn format_departure_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(utc) => {
            let rendered = utc
                .with_timezone(tz)
                .format("%a %b %d %Y %H:%M:%S GMT%z")
                .to_string();
            extract_time_of_day(&rendered)
        }
        None => INVALID_DATE.to_string(),
    }
}

const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Reads the ISO-8601 forms a browser `Date` accepts. Date-times without an
/// offset are wall-clock time in `tz`; a bare date is midnight UTC.
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let with_offset = match raw.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => raw.to_string(),
    };
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&with_offset, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn extracts_time_from_date_string() {
        assert_eq!(
            extract_time_of_day("Thu Feb 20 2025 10:00:00 GMT+0000 (Coordinated Universal Time)"),
            "10:00"
        );
    }

    #[test]
    fn leaves_string_without_time_unchanged() {
        assert_eq!(extract_time_of_day("Invalid Date"), "Invalid Date");
        assert_eq!(extract_time_of_day(""), "");
        assert_eq!(extract_time_of_day("25:99"), "25:99");
    }

    #[test]
    fn uses_time_at_first_colon_only() {
        assert_eq!(extract_time_of_day("at 08:15 then 21:40"), "08:15");
        // first colon has no valid time in front of it
        assert_eq!(extract_time_of_day("note: 08:15"), "note: 08:15");
    }

    #[test]
    fn formats_iso_timestamp_in_utc() {
        assert_eq!(format_departure_in("2025-02-20T10:00:00Z", &Utc), "10:00");
    }

    #[test]
    fn formats_iso_timestamp_in_offset_zone() {
        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(format_departure_in("2025-02-20T10:00:00Z", &tz), "15:30");
        assert_eq!(format_departure_in("2025-02-20T23:45:00+00:00", &tz), "05:15");
    }

    #[test]
    fn accepts_iso_8601_variants() {
        let cases = [
            ("2025-02-20T10:00Z", "10:00"),
            ("2025-02-20T10:00+00:00", "10:00"),
            ("2025-02-20T10:00:00+0000", "10:00"),
            ("2025-02-20T10:00:00.500+0200", "08:00"),
            ("2025-02-20T10:00-0130", "11:30"),
            ("2025-02-20 10:00:00Z", "10:00"),
            ("2025-02-20", "00:00"),
        ];
        for (raw, expected) in cases {
            assert_eq!(format_departure_in(raw, &Utc), expected, "input {raw}");
        }
    }

    #[test]
    fn date_only_is_midnight_utc() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_departure_in("2025-02-20", &tz), "19:00");
    }

    #[test]
    fn naive_timestamp_is_wall_clock_in_zone() {
        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let cases = [
            "2025-02-20T07:05:00",
            "2025-02-20T07:05:00.250",
            "2025-02-20T07:05",
            "2025-02-20 07:05:00",
        ];
        for raw in cases {
            assert_eq!(format_departure_in(raw, &tz), "07:05", "input {raw}");
            assert_eq!(format_departure_in(raw, &Utc), "07:05", "input {raw}");
        }
    }

    #[test]
    fn local_rendering_is_never_the_raw_string() {
        let formatted = format_departure("2025-02-20T10:00:00Z");
        assert_ne!(formatted, "2025-02-20T10:00:00Z");
        let hh_mm = Regex::new(r"^[0-2]\d:[0-5]\d$").unwrap();
        assert!(hh_mm.is_match(&formatted), "got {formatted}");
    }

    #[test]
    fn unparseable_input_does_not_panic() {
        assert_eq!(format_departure("not a date"), INVALID_DATE);
        assert_eq!(format_departure(""), INVALID_DATE);
    }
}
