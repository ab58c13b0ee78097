use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::person::domain::value_objects::PersonType;
use crate::shared::domain::value_objects::ProviderIds;

/// A person with biographical details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CanonicalPerson {
    pub provider_ids: ProviderIds,
    /// Absent when the payload carries no name in either language
    pub name: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub death_date: Option<DateTime<Utc>>,
    /// Birthplace as a single-element list
    pub production_locations: Option<Vec<String>>,
    pub image_url: Option<String>,
}

/// A person as listed in a film's cast and crew
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub provider_ids: ProviderIds,
    pub name: String,
    pub image_url: Option<String>,
    /// Free-text profession or character label, empty when unknown
    pub role: String,
    pub person_type: PersonType,
    /// 1-based position in the normalized listing
    pub sort_order: u32,
}
