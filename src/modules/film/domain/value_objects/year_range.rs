//! Free-text year and year-range strings as found in catalog payloads:
//! `"2010"`, `"2010-2015"`, `"2010-..."`.

use serde::{Deserialize, Serialize};

/// Suffix marking a range that is still running
const OPEN_ENDED_SUFFIX: &str = "-...";

/// Longest digit run either scan accepts
const MAX_YEAR_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub first: Option<i32>,
    pub last: Option<i32>,
    pub is_open_ended: bool,
}

impl YearRange {
    /// Parse a raw year string.
    ///
    /// The leading and trailing years are scanned independently, so
    /// `"2010-2015"` yields 2010 and 2015 without looking at the separator.
    /// Returns `None` when no leading year can be derived.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let first = first_year(raw)?;
        let is_open_ended = is_open_ended(raw);
        let last = if is_open_ended { None } else { last_year(raw) };

        Some(Self {
            first: Some(first),
            last,
            is_open_ended,
        })
    }
}

/// Leading year of a range.
///
/// A plain integer is returned as is. Otherwise the leading run of ASCII digits
/// is used when it is between one and four digits long.
pub fn first_year(raw: Option<&str>) -> Option<i32> {
    let years = raw?.trim();
    if years.is_empty() {
        return None;
    }
    if let Ok(year) = years.parse::<i32>() {
        return Some(year);
    }

    let digits = years.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || digits > MAX_YEAR_DIGITS {
        return None;
    }
    years[..digits].parse().ok()
}

/// Trailing year of a range.
///
/// A plain integer is returned as is. Otherwise the trailing run of ASCII
/// digits is used when it is two to four digits long; a lone trailing digit is
/// not treated as a year.
pub fn last_year(raw: Option<&str>) -> Option<i32> {
    let years = raw?.trim();
    if years.is_empty() {
        return None;
    }
    if let Ok(year) = years.parse::<i32>() {
        return Some(year);
    }

    let digits = years.bytes().rev().take_while(u8::is_ascii_digit).count();
    if digits < 2 || digits > MAX_YEAR_DIGITS {
        return None;
    }
    years[years.len() - digits..].parse().ok()
}

/// True when the raw string ends with the open range marker. Not trimmed.
pub fn is_open_ended(raw: Option<&str>) -> bool {
    raw.map_or(false, |years| years.ends_with(OPEN_ENDED_SUFFIX))
}
