use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::value_objects::ProviderIds;

/// Lightweight record returned for catalog searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub provider_ids: ProviderIds,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub premiere_date: Option<DateTime<Utc>>,
    pub overview: Option<String>,
    pub search_provider_name: String,
}
