use chrono::{DateTime, Utc};

use crate::modules::film::domain::value_objects::YearRange;
use crate::shared::utils::{parse_iso_instant, utc_midnight, LogContext};

/// The five release-date fields a film payload may carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PremiereCandidates<'a> {
    /// Release in the local (primary) market
    pub primary_market: Option<&'a str>,
    pub worldwide: Option<&'a str>,
    pub digital: Option<&'a str>,
    /// DVD release
    pub physical_disc: Option<&'a str>,
    /// Blu-ray release
    pub premium_disc: Option<&'a str>,
}

impl<'a> PremiereCandidates<'a> {
    /// Candidates in the order they are compared against the current result
    fn in_comparison_order(&self) -> [Option<&'a str>; 5] {
        [
            self.primary_market,
            self.worldwide,
            self.digital,
            self.physical_disc,
            self.premium_disc,
        ]
    }
}

/// Picks the authoritative premiere date of a title
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiereDateResolver;

impl PremiereDateResolver {
    /// Resolve the premiere date from the release candidates and the year string.
    ///
    /// The primary candidate (primary market for local titles, worldwide
    /// otherwise) seeds the result, which is then lowered to any earlier
    /// candidate. Lowering only applies once a result exists: when the primary
    /// candidate is missing the others are never consulted and the year
    /// fallback decides.
    pub fn resolve(
        candidates: &PremiereCandidates<'_>,
        year: Option<&str>,
        local_origin: bool,
    ) -> Option<DateTime<Utc>> {
        let primary = if local_origin {
            candidates.primary_market
        } else {
            candidates.worldwide
        };

        let mut resolved = Self::parse_candidate(primary);
        for candidate in candidates.in_comparison_order() {
            if let (Some(current), Some(date)) = (resolved, Self::parse_candidate(candidate)) {
                if date < current {
                    resolved = Some(date);
                }
            }
        }

        resolved.or_else(|| Self::resolve_from_year(year))
    }

    /// January 1st of the first year of the range, for payloads without date fields
    pub fn resolve_from_year(year: Option<&str>) -> Option<DateTime<Utc>> {
        YearRange::parse(year)
            .and_then(|range| range.first)
            .and_then(|first| utc_midnight(first, 1, 1))
    }

    /// December 31st of the last year of the range
    pub fn resolve_end_from_year(year: Option<&str>) -> Option<DateTime<Utc>> {
        YearRange::parse(year)
            .and_then(|range| range.last)
            .and_then(|last| utc_midnight(last, 12, 31))
    }

    fn parse_candidate(raw: Option<&str>) -> Option<DateTime<Utc>> {
        let parsed = parse_iso_instant(raw);
        if parsed.is_none() {
            if let Some(value) = raw {
                LogContext::unparseable_field("premiere date", value);
            }
        }
        parsed
    }
}
