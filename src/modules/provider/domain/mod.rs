pub mod entities;

// Re-exports for easy access
pub use entities::*;
