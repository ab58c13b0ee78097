pub mod kinopoisk;

pub use kinopoisk::KinopoiskMapper;
