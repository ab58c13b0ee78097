use serde::{Deserialize, Serialize};

/// Link to an externally hosted video such as a trailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUrl {
    pub name: Option<String>,
    pub url: Option<String>,
}
