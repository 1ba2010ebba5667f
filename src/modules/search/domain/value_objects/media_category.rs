use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of categories a search result can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    /// Movie catalog (TMDB)
    #[serde(rename = "movie")]
    Movie,
    /// Book catalog (Naver book search)
    #[serde(rename = "book")]
    Book,
    /// Game catalog (RAWG)
    #[serde(rename = "game")]
    Game,
    /// Assigned by the router only; the book provider does not distinguish
    /// webtoons from books
    #[serde(rename = "webtoon")]
    Webtoon,
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaCategory::Movie => "movie",
            MediaCategory::Book => "book",
            MediaCategory::Game => "game",
            MediaCategory::Webtoon => "webtoon",
        };
        write!(f, "{}", name)
    }
}
