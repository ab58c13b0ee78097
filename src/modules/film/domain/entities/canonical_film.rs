use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::value_objects::{ProviderIds, IMDB_KEY};

/// Fields shared by movies and series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilmInfo {
    pub provider_ids: ProviderIds,
    pub name: Option<String>,
    /// Empty when identical to `name`
    pub original_title: String,
    pub premiere_date: Option<DateTime<Utc>>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub production_locations: Vec<String>,
    pub genres: Vec<String>,
    pub official_rating: Option<String>,
    /// 0-10 scale
    pub community_rating: Option<f32>,
    /// 0-10 scale
    pub critic_rating: Option<f32>,
}

impl FilmInfo {
    /// Add a genre unless one with the same name (ignoring case) is present
    pub fn add_genre(&mut self, genre: &str) {
        let genre = genre.trim();
        if genre.is_empty() {
            return;
        }
        let lowered = genre.to_lowercase();
        if !self.genres.iter().any(|g| g.to_lowercase() == lowered) {
            self.genres.push(genre.to_string());
        }
    }

    pub fn provider_id(&self, key: &str) -> Option<&str> {
        self.provider_ids.get(key)
    }

    pub fn imdb_id(&self) -> Option<&str> {
        self.provider_ids.get(IMDB_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CanonicalMovie {
    #[serde(flatten)]
    pub info: FilmInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesStatus {
    Continuing,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSeries {
    #[serde(flatten)]
    pub info: FilmInfo,
    pub end_date: Option<DateTime<Utc>>,
    pub status: SeriesStatus,
}

impl CanonicalSeries {
    pub fn is_continuing(&self) -> bool {
        self.status == SeriesStatus::Continuing
    }
}
