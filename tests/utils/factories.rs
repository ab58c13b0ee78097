/// Test data factories using builder pattern
///
/// Provides convenient methods to create raw Kinopoisk payloads with sensible defaults
use kinometa::modules::provider::models::{
    CommonFilmData, Country, ExternalId, Film, Genre, ImageEntry, Images, ProfessionKey, Rating,
    StaffResponse,
};

pub struct FilmFactory {
    film_id: i64,
    name_ru: Option<String>,
    name_en: Option<String>,
    year: Option<String>,
    countries: Vec<String>,
    genres: Vec<String>,
    description: Option<String>,
    slogan: Option<String>,
    poster_url: Option<String>,
    age_limit: Option<i32>,
    mpaa: Option<String>,
    premiere_ru: Option<String>,
    premiere_world: Option<String>,
    premiere_digital: Option<String>,
    premiere_dvd: Option<String>,
    premiere_blu_ray: Option<String>,
    rating: Option<Rating>,
    imdb_id: Option<String>,
    images: Option<Images>,
}

impl Default for FilmFactory {
    fn default() -> Self {
        Self {
            film_id: 301,
            name_ru: Some("Тестовый фильм".to_string()),
            name_en: None,
            year: None,
            countries: Vec::new(),
            genres: Vec::new(),
            description: None,
            slogan: None,
            poster_url: None,
            age_limit: None,
            mpaa: None,
            premiere_ru: None,
            premiere_world: None,
            premiere_digital: None,
            premiere_dvd: None,
            premiere_blu_ray: None,
            rating: None,
            imdb_id: None,
            images: None,
        }
    }
}

impl FilmFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.film_id = id;
        self
    }

    pub fn with_names(mut self, ru: Option<&str>, en: Option<&str>) -> Self {
        self.name_ru = ru.map(str::to_string);
        self.name_en = en.map(str::to_string);
        self
    }

    pub fn with_year(mut self, year: &str) -> Self {
        self.year = Some(year.to_string());
        self
    }

    pub fn with_countries(mut self, countries: Vec<&str>) -> Self {
        self.countries = countries.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_genres(mut self, genres: Vec<&str>) -> Self {
        self.genres = genres.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_slogan(mut self, slogan: &str) -> Self {
        self.slogan = Some(slogan.to_string());
        self
    }

    pub fn with_poster(mut self, url: &str) -> Self {
        self.poster_url = Some(url.to_string());
        self
    }

    pub fn with_content_rating(mut self, age_limit: Option<i32>, mpaa: Option<&str>) -> Self {
        self.age_limit = age_limit;
        self.mpaa = mpaa.map(str::to_string);
        self
    }

    pub fn with_premiere_ru(mut self, date: &str) -> Self {
        self.premiere_ru = Some(date.to_string());
        self
    }

    pub fn with_premiere_world(mut self, date: &str) -> Self {
        self.premiere_world = Some(date.to_string());
        self
    }

    pub fn with_premiere_digital(mut self, date: &str) -> Self {
        self.premiere_digital = Some(date.to_string());
        self
    }

    pub fn with_premiere_dvd(mut self, date: &str) -> Self {
        self.premiere_dvd = Some(date.to_string());
        self
    }

    pub fn with_premiere_blu_ray(mut self, date: &str) -> Self {
        self.premiere_blu_ray = Some(date.to_string());
        self
    }

    pub fn with_ratings(mut self, kinopoisk: Option<f64>, imdb: Option<f64>, critics: Option<&str>) -> Self {
        self.rating = Some(Rating {
            rating: kinopoisk,
            rating_imdb: imdb,
            rating_film_critics: critics.map(str::to_string),
            ..Default::default()
        });
        self
    }

    pub fn with_imdb_id(mut self, imdb_id: &str) -> Self {
        self.imdb_id = Some(imdb_id.to_string());
        self
    }

    pub fn with_gallery(mut self, posters: Vec<&str>, backdrops: Vec<&str>) -> Self {
        let entries = |urls: Vec<&str>| {
            urls.into_iter()
                .map(|url| ImageEntry {
                    url: Some(url.to_string()),
                    language: None,
                    width: Some(800),
                    height: Some(1200),
                })
                .collect::<Vec<_>>()
        };
        self.images = Some(Images {
            posters: Some(entries(posters)),
            backdrops: Some(entries(backdrops)),
        });
        self
    }

    pub fn build(self) -> Film {
        Film {
            data: Some(CommonFilmData {
                film_id: Some(self.film_id),
                name_ru: self.name_ru,
                name_en: self.name_en,
                year: self.year,
                countries: Some(
                    self.countries
                        .into_iter()
                        .map(|country| Country {
                            country: Some(country),
                        })
                        .collect(),
                ),
                genres: Some(
                    self.genres
                        .into_iter()
                        .map(|genre| Genre { genre: Some(genre) })
                        .collect(),
                ),
                description: self.description,
                slogan: self.slogan,
                poster_url: self.poster_url,
                rating_age_limits: self.age_limit,
                rating_mpaa: self.mpaa,
                premiere_ru: self.premiere_ru,
                premiere_world: self.premiere_world,
                premiere_digital: self.premiere_digital,
                premiere_dvd: self.premiere_dvd,
                premiere_blu_ray: self.premiere_blu_ray,
                ..Default::default()
            }),
            rating: self.rating,
            external_id: self.imdb_id.map(|id| ExternalId { imdb_id: Some(id) }),
            images: self.images,
        }
    }
}

pub struct StaffFactory;

impl StaffFactory {
    pub fn entry(id: i64, name_ru: Option<&str>, name_en: Option<&str>, key: ProfessionKey) -> StaffResponse {
        StaffResponse {
            staff_id: Some(id),
            name_ru: name_ru.map(str::to_string),
            name_en: name_en.map(str::to_string),
            profession_key: Some(key),
            ..Default::default()
        }
    }
}
