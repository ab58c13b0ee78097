use super::models::{CommonFilmData, Film, FilmSearchResponse, SearchFilm};
use crate::modules::film::domain::{
    entities::{CanonicalMovie, CanonicalSeries, FilmInfo, SearchResult, SeriesStatus},
    services::{PremiereCandidates, PremiereDateResolver},
    value_objects::{official_rating, year_range, FilmTitle, LocaleNameSelector, RatingNormalizer},
};
use crate::modules::provider::domain::entities::ProviderConfig;
use crate::shared::domain::value_objects::{ProviderIds, IMDB_KEY};
use crate::shared::errors::AppError;
use crate::shared::utils::{is_blank, LogContext};
use chrono::{DateTime, Utc};

/// Kinopoisk specific mapper implementation
///
/// Turns raw catalog payloads into canonical records. Holds only the immutable
/// provider configuration, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct KinopoiskMapper {
    pub(super) config: ProviderConfig,
    pub(super) names: LocaleNameSelector,
}

impl KinopoiskMapper {
    /// Create a mapper for the given provider identity
    pub fn new(config: ProviderConfig) -> Result<Self, AppError> {
        config.validate()?;
        let names = LocaleNameSelector::new(config.origin_country.clone());
        Ok(Self { config, names })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    // =========================================================================
    // NAME AND DATE RESOLUTION
    // =========================================================================

    /// True when the film was produced in the configured origin country
    pub fn is_local_origin(&self, data: &CommonFilmData) -> bool {
        self.names.is_local_origin(Self::countries(data))
    }

    /// Resolve display and original names of a film
    pub fn film_title(&self, data: &CommonFilmData) -> FilmTitle {
        self.names.resolve(
            data.name_ru.as_deref(),
            data.name_en.as_deref(),
            Self::countries(data),
        )
    }

    /// Premiere date from the five release candidates, falling back to the year
    pub fn premiere_date(&self, data: &CommonFilmData) -> Option<DateTime<Utc>> {
        let candidates = PremiereCandidates {
            primary_market: data.premiere_ru.as_deref(),
            worldwide: data.premiere_world.as_deref(),
            digital: data.premiere_digital.as_deref(),
            physical_disc: data.premiere_dvd.as_deref(),
            premium_disc: data.premiere_blu_ray.as_deref(),
        };
        PremiereDateResolver::resolve(
            &candidates,
            data.year.as_deref(),
            self.is_local_origin(data),
        )
    }

    fn countries(data: &CommonFilmData) -> impl Iterator<Item = &str> {
        data.countries
            .iter()
            .flatten()
            .filter_map(|c| c.country.as_deref())
    }

    /// Ids holding the catalog id under the configured provider id key
    pub(super) fn source_ids(&self, id: Option<i64>) -> ProviderIds {
        match id {
            Some(id) => ProviderIds::with_id(self.config.provider_id.as_str(), id.to_string()),
            None => ProviderIds::new(),
        }
    }

    // =========================================================================
    // FILM MAPPING
    // =========================================================================

    /// Map a film payload to a movie
    pub fn to_movie(&self, film: &Film) -> Option<CanonicalMovie> {
        let info = self.map_film_info(film)?;
        Some(CanonicalMovie { info })
    }

    /// Map a film payload to a series
    pub fn to_series(&self, film: &Film) -> Option<CanonicalSeries> {
        let info = self.map_film_info(film)?;
        let year = film.data.as_ref().and_then(|d| d.year.as_deref());

        let status = if year_range::is_open_ended(year) {
            SeriesStatus::Continuing
        } else {
            SeriesStatus::Ended
        };

        Some(CanonicalSeries {
            info,
            end_date: PremiereDateResolver::resolve_end_from_year(year),
            status,
        })
    }

    /// Fields common to movies and series
    fn map_film_info(&self, film: &Film) -> Option<FilmInfo> {
        let Some(data) = film.data.as_ref() else {
            LogContext::normalized("film", None, false);
            return None;
        };

        let title = self.film_title(data);
        let mut info = FilmInfo {
            provider_ids: self.source_ids(data.film_id),
            name: title.name,
            original_title: title.original_title,
            premiere_date: self.premiere_date(data),
            overview: data.description.clone(),
            official_rating: official_rating(
                data.rating_age_limits,
                data.rating_mpaa.as_deref(),
            ),
            ..Default::default()
        };

        if !is_blank(data.slogan.as_deref()) {
            info.tagline = data.slogan.clone();
        }
        info.production_locations = Self::countries(data).map(str::to_string).collect();
        for genre in data.genres.iter().flatten().filter_map(|g| g.genre.as_deref()) {
            info.add_genre(genre);
        }

        if let Some(rating) = film.rating.as_ref() {
            info.community_rating =
                RatingNormalizer::community_rating(rating.rating, rating.rating_imdb);
            info.critic_rating =
                RatingNormalizer::critic_rating(rating.rating_film_critics.as_deref());
        }

        if let Some(imdb_id) = film.external_id.as_ref().and_then(|e| e.imdb_id.as_deref()) {
            if !is_blank(Some(imdb_id)) {
                info.provider_ids.set(IMDB_KEY, imdb_id);
            }
        }

        LogContext::normalized("film", data.film_id, true);
        Some(info)
    }

    // =========================================================================
    // SEARCH MAPPING
    // =========================================================================

    /// Map a full film payload to a search result
    pub fn to_search_result(&self, film: &Film) -> Option<SearchResult> {
        let data = film.data.as_ref()?;

        Some(SearchResult {
            provider_ids: self.source_ids(data.film_id),
            name: self.film_title(data).name,
            image_url: data.poster_url.clone(),
            premiere_date: self.premiere_date(data),
            overview: data.description.clone(),
            search_provider_name: self.config.provider_name.clone(),
        })
    }

    /// Map a search entry; only the year is available for the premiere date
    pub fn map_search_film(&self, entry: &SearchFilm) -> SearchResult {
        SearchResult {
            provider_ids: self.source_ids(entry.film_id),
            name: self
                .names
                .local_name(entry.name_ru.as_deref(), entry.name_en.as_deref())
                .map(str::to_string),
            image_url: entry.poster_url.clone(),
            premiere_date: PremiereDateResolver::resolve_from_year(entry.year.as_deref()),
            overview: entry.description.clone(),
            search_provider_name: self.config.provider_name.clone(),
        }
    }

    /// Map every film of a search response, in response order
    pub fn to_search_results(&self, response: Option<&FilmSearchResponse>) -> Vec<SearchResult> {
        response
            .and_then(|r| r.films.as_ref())
            .map(|films| films.iter().map(|f| self.map_search_film(f)).collect())
            .unwrap_or_default()
    }
}

impl Default for KinopoiskMapper {
    fn default() -> Self {
        let config = ProviderConfig::default();
        Self {
            names: LocaleNameSelector::new(config.origin_country.clone()),
            config,
        }
    }
}
