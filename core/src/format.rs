//! Display formatting for task timestamps.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Shown in place of a timestamp the server did not send.
pub const MISSING_DATE: &str = "Fecha no disponible";

const DATE_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// `dd/mm/yyyy, HH:MM` in the local time zone.
pub fn format_date(date: &DateTime<Utc>) -> String {
    format_date_in(date, &Local)
}

/// `dd/mm/yyyy, HH:MM` in `tz`.
pub fn format_date_in<Tz>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Parses an RFC 3339 timestamp and formats it in the local time zone.
/// Returns `None` if `text` is not a timestamp.
pub fn format_date_str(text: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(text.trim()).ok()?;
    Some(format_date(&parsed.with_timezone(&Utc)))
}

pub fn display_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => format_date(date),
        None => MISSING_DATE.to_string(),
    }
}
