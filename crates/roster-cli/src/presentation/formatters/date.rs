use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::PLACEHOLDER;

/// Calendar date as `M/D/YYYY`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`.
/// Anything else is returned unchanged.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return PLACEHOLDER.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER.to_string();
    }

    match parse_date(trimmed) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|ts| ts.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(format_date(Some("2024-03-01")), "3/1/2024");
        assert_eq!(format_date(Some("2019-12-25")), "12/25/2019");
    }

    #[test]
    fn test_timestamp_keeps_calendar_date() {
        assert_eq!(format_date(Some("2024-03-01T23:30:00Z")), "3/1/2024");
        assert_eq!(format_date(Some("2024-03-01T08:00:00")), "3/1/2024");
    }

    #[test]
    fn test_missing_is_placeholder() {
        assert_eq!(format_date(None), PLACEHOLDER);
        assert_eq!(format_date(Some("")), PLACEHOLDER);
    }

    #[test]
    fn test_unparseable_unchanged() {
        assert_eq!(format_date(Some("next spring")), "next spring");
        assert_eq!(format_date(Some("2024-13-01")), "2024-13-01");
    }
}
