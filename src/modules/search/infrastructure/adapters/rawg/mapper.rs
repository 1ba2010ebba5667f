use super::models::Game;
use crate::modules::search::domain::services::ResultNormalizer;
use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::modules::search::infrastructure::adapters::ResultMapper;

/// RAWG specific mapper implementation
#[derive(Debug, Clone)]
pub struct RawgMapper;

impl RawgMapper {
    pub fn new() -> Self {
        Self
    }
}

impl ResultMapper<Game> for RawgMapper {
    fn map_to_result(&self, game: Game) -> SearchResult {
        SearchResult {
            title: game.name.unwrap_or_default(),
            image_url: ResultNormalizer::image_url(game.background_image),
            release_date: None,
            category: MediaCategory::Game,
            external_id: game.id.map(|id| id.to_string()).unwrap_or_default(),
            // The game catalog has no author; the release year stands in
            author: ResultNormalizer::release_year(game.released.as_deref()),
        }
    }
}
