pub mod canonical_image;
pub mod media_url;

pub use canonical_image::CanonicalImage;
pub use media_url::MediaUrl;
