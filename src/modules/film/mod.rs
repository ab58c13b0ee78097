pub mod domain;

pub use domain::{
    CanonicalMovie, CanonicalSeries, FilmInfo, PremiereDateResolver, SearchResult, SeriesStatus,
    YearRange,
};
