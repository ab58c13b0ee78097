//! Ordered-candidate combinators for per-field fallback chains.
//!
//! Every precedence rule in the mappers (which name wins, which rating scale is
//! used) is written as an ordered candidate list fed to one of these helpers, so
//! the order itself is the rule.

/// True when the value is absent, empty, or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// The first candidate that is present and not blank, returned untrimmed
pub fn first_non_blank<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .find(|candidate| !is_blank(*candidate))
        .flatten()
}

/// The first candidate for which `parse` yields a value
pub fn first_parseable<C, T, I, F>(candidates: I, parse: F) -> Option<T>
where
    I: IntoIterator<Item = C>,
    F: FnMut(C) -> Option<T>,
{
    candidates.into_iter().find_map(parse)
}

/// The first candidate strictly greater than zero; zero counts as "not provided"
pub fn first_positive<I>(candidates: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    candidates.into_iter().flatten().find(|value| *value > 0.0)
}
