//! Local vs. original title selection for a film payload

use serde::{Deserialize, Serialize};

use crate::shared::utils::is_blank;

/// Picks which of the two payload names is local and which is original
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleNameSelector {
    origin_country: String,
}

impl LocaleNameSelector {
    pub fn new(origin_country: impl Into<String>) -> Self {
        Self {
            origin_country: origin_country.into(),
        }
    }

    /// True when any production country matches the origin label exactly
    pub fn is_local_origin<'a, I>(&self, countries: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        countries
            .into_iter()
            .any(|country| country == self.origin_country)
    }

    /// Local-language name, or the alternate name as-is when the local one is blank
    pub fn local_name<'a>(
        &self,
        local: Option<&'a str>,
        alternate: Option<&'a str>,
    ) -> Option<&'a str> {
        if is_blank(local) {
            alternate
        } else {
            local
        }
    }

    /// Name in the language the title was produced in
    pub fn original_name<'a>(
        &self,
        local: Option<&'a str>,
        alternate: Option<&'a str>,
        local_origin: bool,
    ) -> Option<&'a str> {
        if local_origin {
            local
        } else {
            alternate
        }
    }

    /// Original name, or an empty string when it is blank or equal to the local name
    pub fn original_name_if_distinct(&self, local_name: Option<&str>, original: Option<&str>) -> String {
        match original {
            Some(name) if !is_blank(original) && Some(name) != local_name => name.to_string(),
            _ => String::new(),
        }
    }

    /// Resolve both names of a payload at once
    pub fn resolve<'a, I>(
        &self,
        local: Option<&str>,
        alternate: Option<&str>,
        countries: I,
    ) -> FilmTitle
    where
        I: IntoIterator<Item = &'a str>,
    {
        let local_origin = self.is_local_origin(countries);
        let name = self.local_name(local, alternate);
        let original = self.original_name(local, alternate, local_origin);

        FilmTitle {
            name: name.map(str::to_string),
            original_title: self.original_name_if_distinct(name, original),
            local_origin,
        }
    }
}

/// Resolved names of a film
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmTitle {
    /// Display name, absent when neither payload name is present
    pub name: Option<String>,
    /// Original name, empty when it adds nothing over `name`
    pub original_title: String,
    /// Whether the title originates in the local market
    pub local_origin: bool,
}
