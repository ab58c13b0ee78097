pub mod entities;
pub mod value_objects;

pub use entities::{CanonicalImage, MediaUrl};
pub use value_objects::ImageType;
