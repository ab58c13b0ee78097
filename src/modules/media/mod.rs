pub mod domain;

// Re-export commonly used types
pub use domain::{CanonicalImage, ImageType, MediaUrl};
