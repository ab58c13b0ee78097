pub mod film;
pub mod media;
pub mod person;
pub mod provider;
