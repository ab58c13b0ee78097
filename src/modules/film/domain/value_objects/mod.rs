pub mod content_rating;
pub mod film_title;
pub mod rating;
pub mod year_range;

pub use content_rating::official_rating;
pub use film_title::{FilmTitle, LocaleNameSelector};
pub use rating::RatingNormalizer;
pub use year_range::YearRange;
