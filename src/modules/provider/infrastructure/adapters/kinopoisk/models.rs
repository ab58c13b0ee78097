//! Kinopoisk unofficial API payloads, as delivered by the fetch collaborator.
//!
//! Every field is optional: the catalog omits or nulls fields freely and the
//! mappers decide what an absent value means.

use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::errors::AppResult;

/// Deserialize a nullable list, dropping null entries
fn vec_skip_nulls<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(entries.map(|list| list.into_iter().flatten().collect()))
}

// Film details envelope
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default)]
    pub data: Option<CommonFilmData>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub external_id: Option<ExternalId>,
    #[serde(default)]
    pub images: Option<Images>,
}

impl Film {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFilmData {
    #[serde(default)]
    pub film_id: Option<i64>,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub poster_url_preview: Option<String>,
    /// Free text: "2010", "2010-2015", "2010-..."
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub film_length: Option<String>,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>, // "FILM", "TV_SHOW", "MINI_SERIES"
    #[serde(default)]
    pub rating_mpaa: Option<String>,
    #[serde(default)]
    pub rating_age_limits: Option<i32>,
    #[serde(default)]
    pub premiere_ru: Option<String>,
    #[serde(default)]
    pub distributors: Option<String>,
    #[serde(default)]
    pub premiere_world: Option<String>,
    #[serde(default)]
    pub premiere_digital: Option<String>,
    #[serde(default)]
    pub premiere_world_country: Option<String>,
    #[serde(default)]
    pub premiere_dvd: Option<String>,
    #[serde(default)]
    pub premiere_blu_ray: Option<String>,
    #[serde(default)]
    pub distributor_release: Option<String>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub countries: Option<Vec<Country>>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub genres: Option<Vec<Genre>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Kinopoisk user rating, 0-10
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_vote_count: Option<i64>,
    #[serde(default)]
    pub rating_imdb: Option<f64>,
    #[serde(default)]
    pub rating_imdb_vote_count: Option<i64>,
    /// Either a ten-point decimal ("7.2") or a percentage ("85%")
    #[serde(default)]
    pub rating_film_critics: Option<String>,
    #[serde(default)]
    pub rating_film_critics_vote_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalId {
    #[serde(default)]
    pub imdb_id: Option<String>,
}

// Galleries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Images {
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub posters: Option<Vec<ImageEntry>>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub backdrops: Option<Vec<ImageEntry>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

// Videos
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoResponse {
    /// Null entries are kept; an all-null list still counts as non-empty
    #[serde(default)]
    pub trailers: Option<Vec<Option<Trailer>>>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub teasers: Option<Vec<Trailer>>,
}

impl VideoResponse {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trailer {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
}

// Search
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmSearchResponse {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub pages_count: Option<u32>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub films: Option<Vec<SearchFilm>>,
}

impl FilmSearchResponse {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Film entry of a search response; carries no release-date fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilm {
    #[serde(default)]
    pub film_id: Option<i64>,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub film_length: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub poster_url_preview: Option<String>,
}

// People
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    #[serde(default)]
    pub person_id: Option<i64>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    /// ISO date-time, e.g. "1964-09-02T00:00:00"
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub death: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub birthplace: Option<String>,
    #[serde(default)]
    pub deathplace: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
}

impl PersonResponse {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfessionKey {
    Writer,
    Operator,
    Editor,
    Composer,
    ProducerUssr,
    Translator,
    Director,
    Design,
    Producer,
    Actor,
    VoiceDirector,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    #[serde(default)]
    pub staff_id: Option<i64>,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    /// Character name for actors
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub profession_text: Option<String>,
    #[serde(default)]
    pub profession_key: Option<ProfessionKey>,
}

impl StaffResponse {
    /// Decode a staff listing, skipping null entries
    pub fn list_from_json(json: &str) -> AppResult<Vec<Self>> {
        let entries: Vec<Option<Self>> = serde_json::from_str(json)?;
        Ok(entries.into_iter().flatten().collect())
    }
}
