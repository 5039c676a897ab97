//! Date and datetime parsing.
//!
//! Accepts ISO 8601 (with `T` or space separator, optional seconds and
//! fractional seconds), RFC 3339 with an offset, and the common slash,
//! dotted and month-name layouts. Dates map to midnight. Month-first wins
//! over day-first for ambiguous slash dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 13] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 12] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%Y-%b-%d",
];

/// Parse a single value as a datetime.
///
/// Case-insensitive, so values that went through text standardization
/// (`2024-01-15t10:30:00`, `15-jan-2024`) still parse.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let upper = trimmed.to_ascii_uppercase();

    if let Ok(dt) = DateTime::parse_from_rfc3339(&upper) {
        return Some(dt.naive_utc());
    }
    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&upper, fmt) {
            return Some(dt);
        }
    }
    for fmt in &DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&upper, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    parse_year_month(&upper)
}

/// `YYYY-MM`, anchored to the first day of the month.
fn parse_year_month(value: &str) -> Option<NaiveDateTime> {
    if value.len() != 7 || value.as_bytes().get(4) != Some(&b'-') {
        return None;
    }
    let year = value.get(0..4)?.parse::<i32>().ok()?;
    let month = value.get(5..7)?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.and_time(NaiveTime::MIN))
}

/// True when the column has at least one present value and every present
/// value parses as a datetime.
pub fn is_datetime_column<S: AsRef<str>>(values: &[Option<S>]) -> bool {
    let mut present = values.iter().flatten().peekable();
    if present.peek().is_none() {
        return false;
    }
    present.all(|value| parse_datetime(value.as_ref()).is_some())
}
