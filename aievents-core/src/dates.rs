//! Best-effort handling of the free-form date strings found in event listings.
//!
//! Listings carry dates like "2025-06-01", "Jun 01, 2025" or Devpost's
//! "May 1, 2025 @ 4:30am GMT+5:30". Anything that doesn't parse stays a raw
//! string: it is displayed as-is and never matches a month filter.

use chrono::{DateTime, Datelike, NaiveDate};

/// Formats tried, in order, after the ISO and RFC 3339 forms.
const DATE_FORMATS: &[&str] = &[
    // "%B" also accepts the three-letter abbreviation when parsing
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Years below this come from a format swallowing digits of a bare year.
const MIN_YEAR: i32 = 1000;

/// Parse an event date field into a calendar date.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    parse_date_text(raw).filter(|date| date.year() >= MIN_YEAR)
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    // Devpost deadlines carry a time and zone after '@'; only the date matters
    let s = raw.split('@').next().unwrap_or(raw).trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    // ISO date, optionally followed by a time component
    if let Ok((date, rest)) = NaiveDate::parse_and_remainder(s, "%Y-%m-%d") {
        if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
            return Some(date);
        }
    }

    // "June 2025" means the first of the month
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {}", s), "%d %B %Y") {
        return Some(date);
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Format a date field for display, e.g. "Jun 1, 2025".
/// Unparsable values are returned unchanged.
pub fn format_event_date(raw: &str) -> String {
    match parse_event_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Whole days from `from` to `to` (negative once `to` has passed).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_and_rfc3339() {
        assert_eq!(parse_event_date("2025-06-01"), Some(ymd(2025, 6, 1)));
        assert_eq!(parse_event_date("2025-06-01T10:00:00"), Some(ymd(2025, 6, 1)));
        assert_eq!(
            parse_event_date("2025-06-01T10:00:00+02:00"),
            Some(ymd(2025, 6, 1))
        );
    }

    #[test]
    fn parses_listing_formats() {
        assert_eq!(parse_event_date("Jun 01, 2025"), Some(ymd(2025, 6, 1)));
        assert_eq!(parse_event_date("June 3, 2025"), Some(ymd(2025, 6, 3)));
        assert_eq!(parse_event_date("12 Jul 2025"), Some(ymd(2025, 7, 12)));
        assert_eq!(parse_event_date("07/04/2025"), Some(ymd(2025, 7, 4)));
    }

    #[test]
    fn parses_devpost_deadline() {
        assert_eq!(
            parse_event_date("May 1, 2025 @ 4:30am GMT+5:30"),
            Some(ymd(2025, 5, 1))
        );
    }

    #[test]
    fn month_and_year_is_first_of_month() {
        assert_eq!(parse_event_date("June 2025"), Some(ymd(2025, 6, 1)));
        assert_eq!(parse_event_date("Sep 2026"), Some(ymd(2026, 9, 1)));
        assert_eq!(format_event_date("Dec 2031"), "Dec 1, 2031");
    }

    #[test]
    fn rejects_implausible_years() {
        assert_eq!(parse_event_date("June 25"), None);
        assert_eq!(format_event_date("0025-06-20"), "0025-06-20");
    }

    #[test]
    fn rejects_placeholders() {
        assert_eq!(parse_event_date("TBA"), None);
        assert_eq!(parse_event_date("not-a-date"), None);
        assert_eq!(parse_event_date(""), None);
        assert_eq!(parse_event_date("2025-06-01xyz"), None);
    }

    #[test]
    fn display_falls_back_to_raw() {
        assert_eq!(format_event_date("2025-06-01"), "Jun 1, 2025");
        assert_eq!(format_event_date("TBA"), "TBA");
    }

    #[test]
    fn days_between_counts_calendar_days() {
        assert_eq!(days_between(ymd(2025, 5, 25), ymd(2025, 6, 1)), 7);
        assert_eq!(days_between(ymd(2025, 6, 1), ymd(2025, 6, 1)), 0);
        assert_eq!(days_between(ymd(2025, 6, 2), ymd(2025, 6, 1)), -1);
    }
}
