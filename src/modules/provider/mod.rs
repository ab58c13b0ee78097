pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{ProviderConfig, ProviderConfigBuilder};
pub use infrastructure::adapters::kinopoisk::models;
pub use infrastructure::KinopoiskMapper;
