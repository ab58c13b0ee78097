use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key the IMDb cross-reference is stored under
pub const IMDB_KEY: &str = "Imdb";

/// External identifiers of a canonical record, keyed by provider id key
///
/// The source catalog's own id lives under the configured provider id key,
/// cross-references under fixed keys such as [`IMDB_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIds {
    external_ids: BTreeMap<String, String>,
}

impl ProviderIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids with one entry already set
    pub fn with_id(key: impl Into<String>, id: impl Into<String>) -> Self {
        let mut ids = Self::new();
        ids.set(key, id);
        ids
    }

    /// Get external ID stored under a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.external_ids.get(key).map(String::as_str)
    }

    /// Add or replace the external ID under a key
    pub fn set(&mut self, key: impl Into<String>, id: impl Into<String>) {
        self.external_ids.insert(key.into(), id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_and_set() {
        let mut ids = ProviderIds::with_id("KinopoiskUnofficial", "301");
        assert_eq!(ids.get("KinopoiskUnofficial"), Some("301"));
        assert_eq!(ids.get(IMDB_KEY), None);

        ids.set(IMDB_KEY, "tt0133093");
        assert_eq!(ids.get(IMDB_KEY), Some("tt0133093"));

        ids.set(IMDB_KEY, "tt0234215");
        assert_eq!(ids.get(IMDB_KEY), Some("tt0234215"));
    }

    #[test]
    fn test_serializes_keys_verbatim() {
        let ids = ProviderIds::with_id("CustomKey", "301");
        let json = serde_json::to_value(&ids).unwrap();
        assert_eq!(json["external_ids"]["CustomKey"], "301");
    }
}
