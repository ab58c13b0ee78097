// Shared Kernel - value objects, errors and helpers used by every module

pub mod domain; // Shared domain concepts (provider ids)
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (fallback chains, date parsing, logging)

// Re-exports for convenience
pub use domain::value_objects::{ProviderIds, IMDB_KEY};
pub use errors::{AppError, AppResult};
