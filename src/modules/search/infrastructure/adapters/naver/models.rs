use serde::{Deserialize, Serialize};

// Response envelope ("items", not "results")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaverSearchResponse {
    #[serde(default)]
    pub items: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// May carry inline emphasis markup around the query match
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub pubdate: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}
