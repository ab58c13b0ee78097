mod image_type;

pub use image_type::ImageType;
