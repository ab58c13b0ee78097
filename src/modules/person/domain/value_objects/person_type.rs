use serde::{Deserialize, Serialize};

/// Role category of a cast or crew entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonType {
    Actor,
    Director,
    Writer,
    Composer,
    Producer,
    /// Any profession without a canonical category
    #[serde(rename = "")]
    Unclassified,
}

impl PersonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Actor => "Actor",
            PersonType::Director => "Director",
            PersonType::Writer => "Writer",
            PersonType::Composer => "Composer",
            PersonType::Producer => "Producer",
            PersonType::Unclassified => "",
        }
    }

    pub fn is_classified(&self) -> bool {
        *self != PersonType::Unclassified
    }
}

impl std::fmt::Display for PersonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
