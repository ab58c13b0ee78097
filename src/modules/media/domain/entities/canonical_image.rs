use serde::{Deserialize, Serialize};

use crate::modules::media::domain::value_objects::ImageType;

/// Image offered for a film or person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalImage {
    pub image_type: ImageType,
    pub url: String,
    pub language: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub provider_name: String,
}
