//! Date storage and display formatting
//!
//! Timestamps are stored as UTC text in `SQL_DATETIME_FORMAT`, a fixed-width
//! layout whose lexicographic order matches chronological order, so SQLite
//! can compare stored values directly against a bound "now" string.

use chrono::NaiveDateTime;

/// Storage format for timestamps (matches SQLite's `CURRENT_TIMESTAMP`)
pub const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp for storage or SQL comparison.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use encore_common::date_display::to_sql_datetime;
///
/// let dt = NaiveDate::from_ymd_opt(2012, 6, 15).unwrap().and_hms_opt(19, 30, 0).unwrap();
/// assert_eq!(to_sql_datetime(&dt), "2012-06-15 19:30:00");
/// ```
pub fn to_sql_datetime(dt: &NaiveDateTime) -> String {
    dt.format(SQL_DATETIME_FORMAT).to_string()
}

/// Parse a stored timestamp back into a `NaiveDateTime`.
///
/// Accepts the canonical storage format, plus the `T`-separated variant for
/// values written by other tools.
pub fn parse_sql_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, SQL_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Parse a start time submitted from a form.
///
/// Browsers post `datetime-local` inputs as `2012-06-15T19:30` (seconds
/// optional); plain `YYYY-MM-DD HH:MM:SS` text is accepted too.
pub fn parse_form_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, SQL_DATETIME_FORMAT))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M"))
        .ok()
}

/// Format a show start time for listings and detail pages.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use encore_common::date_display::format_start_time;
///
/// let dt = NaiveDate::from_ymd_opt(2012, 6, 15).unwrap().and_hms_opt(19, 30, 0).unwrap();
/// assert_eq!(format_start_time(&dt), "Fri, 06 15, 2012 7:30PM");
/// ```
pub fn format_start_time(dt: &NaiveDateTime) -> String {
    dt.format("%a, %m %d, %Y %-I:%M%p").to_string()
}

/// Long-form variant used where a page has room for the full date
pub fn format_start_time_full(dt: &NaiveDateTime) -> String {
    dt.format("%A, %B %-d, %Y at %-I:%M%p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_sql_roundtrip() {
        let value = dt(2024, 4, 1, 19, 30);
        let text = to_sql_datetime(&value);
        assert_eq!(text, "2024-04-01 19:30:00");
        assert_eq!(parse_sql_datetime(&text), Some(value));
    }

    #[test]
    fn test_sql_order_matches_chronological_order() {
        let earlier = to_sql_datetime(&dt(2024, 4, 1, 19, 30));
        let later = to_sql_datetime(&dt(2024, 11, 3, 9, 0));
        assert!(earlier < later);
    }

    #[test]
    fn test_form_parsing_variants() {
        let expected = Some(dt(2024, 4, 1, 19, 30));
        assert_eq!(parse_form_datetime("2024-04-01T19:30"), expected);
        assert_eq!(parse_form_datetime("2024-04-01T19:30:00"), expected);
        assert_eq!(parse_form_datetime("2024-04-01 19:30:00"), expected);
        assert_eq!(parse_form_datetime("2024-04-01 19:30"), expected);
        assert_eq!(parse_form_datetime("next tuesday"), None);
        assert_eq!(parse_form_datetime(""), None);
    }

    #[test]
    fn test_medium_format() {
        assert_eq!(format_start_time(&dt(2012, 6, 15, 19, 30)), "Fri, 06 15, 2012 7:30PM");
        assert_eq!(format_start_time(&dt(2024, 1, 2, 0, 5)), "Tue, 01 02, 2024 12:05AM");
        assert_eq!(format_start_time(&dt(2024, 12, 25, 12, 0)), "Wed, 12 25, 2024 12:00PM");
    }

    #[test]
    fn test_full_format() {
        assert_eq!(
            format_start_time_full(&dt(2012, 6, 15, 19, 30)),
            "Friday, June 15, 2012 at 7:30PM"
        );
    }
}
