//! Normalization of Kinopoisk catalog payloads into canonical catalog records.
//!
//! Raw payloads (see [`modules::provider::models`]) go through
//! [`KinopoiskMapper`], which resolves names, premiere dates, ratings, people
//! and images into plain value objects. Every operation is pure: malformed
//! fields degrade to absent values and nothing is written anywhere but the log.

pub mod modules;
pub mod shared;

pub use modules::film::{
    CanonicalMovie, CanonicalSeries, FilmInfo, PremiereDateResolver, SearchResult, SeriesStatus,
    YearRange,
};
pub use modules::media::{CanonicalImage, ImageType, MediaUrl};
pub use modules::person::{CanonicalPerson, CastMember, PersonType};
pub use modules::provider::{KinopoiskMapper, ProviderConfig};
pub use shared::{AppError, AppResult, ProviderIds, IMDB_KEY};
