pub mod canonical_film;
pub mod search_result;

pub use canonical_film::{CanonicalMovie, CanonicalSeries, FilmInfo, SeriesStatus};
pub use search_result::SearchResult;
