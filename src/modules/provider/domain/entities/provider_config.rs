use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;
use crate::shared::utils::Validator;

/// Identity of the source catalog, injected into the mappers
///
/// Holds the values every canonical record is stamped with plus the
/// origin-country label that decides which name and premiere date are primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Human-readable provider name attached to images and search results
    pub provider_name: String,
    /// Key the catalog's own id is stored under in `ProviderIds`
    pub provider_id: String,
    /// Language tag given to the film's main poster
    pub metadata_language: String,
    /// Country label marking a title as originating in the local market
    pub origin_country: String,
}

impl ProviderConfig {
    pub fn new() -> Self {
        Self {
            provider_name: "Кинопоиск".to_string(),
            provider_id: "KinopoiskUnofficial".to_string(),
            metadata_language: "ru".to_string(),
            origin_country: "Россия".to_string(),
        }
    }

    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), AppError> {
        Validator::validate_not_blank("provider_name", &self.provider_name)?;
        Validator::validate_not_blank("provider_id", &self.provider_id)?;
        Validator::validate_language_tag("metadata_language", &self.metadata_language)?;
        Validator::validate_not_blank("origin_country", &self.origin_country)?;
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for ProviderConfig to make test setup easier
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ProviderConfig::new(),
        }
    }

    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.config.provider_name = name.into();
        self
    }

    pub fn provider_id(mut self, id: impl Into<String>) -> Self {
        self.config.provider_id = id.into();
        self
    }

    pub fn metadata_language(mut self, language: impl Into<String>) -> Self {
        self.config.metadata_language = language.into();
        self
    }

    pub fn origin_country(mut self, country: impl Into<String>) -> Self {
        self.config.origin_country = country.into();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ProviderConfig, AppError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProviderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.metadata_language, "ru");
        assert_eq!(config.origin_country, "Россия");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProviderConfig::builder()
            .provider_name("Test")
            .origin_country("Беларусь")
            .metadata_language("be")
            .build()
            .unwrap();

        assert_eq!(config.provider_name, "Test");
        assert_eq!(config.origin_country, "Беларусь");
        assert_eq!(config.metadata_language, "be");
        assert_eq!(config.provider_id, "KinopoiskUnofficial");
    }

    #[test]
    fn test_builder_rejects_blank_values() {
        let result = ProviderConfig::builder().provider_id(" ").build();
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let result = ProviderConfig::builder().metadata_language("r u").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_deserializes_from_json() {
        let json = r#"{
            "provider_name": "KP",
            "provider_id": "kp",
            "metadata_language": "ru",
            "origin_country": "СССР"
        }"#;
        let config: ProviderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.origin_country, "СССР");
        assert!(config.validate().is_ok());
    }
}
