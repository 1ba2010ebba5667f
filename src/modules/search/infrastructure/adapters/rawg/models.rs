use serde::{Deserialize, Serialize};

// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawgSearchResponse {
    #[serde(default)]
    pub results: Vec<Game>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    /// ISO date string; only the leading 4 characters are displayed
    #[serde(default)]
    pub released: Option<String>,
}
