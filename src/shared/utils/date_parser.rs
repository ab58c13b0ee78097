use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a strict ISO-8601 instant (date and time of day).
///
/// Accepts RFC 3339 strings with an offset, and offset-less date-times which
/// are taken as UTC. Bare dates and every other shape yield `None`.
pub fn parse_iso_instant(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}

/// Midnight UTC on the given calendar day, if the day exists
pub fn utc_midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
