use async_trait::async_trait;

use crate::modules::search::domain::entities::ProviderConfig;
use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::modules::search::infrastructure::adapters::ResultMapper;
use crate::modules::search::infrastructure::http_client::ProviderClient;
use crate::modules::search::traits::SearchProviderClient;
use crate::shared::errors::AppResult;

use super::mapper::RawgMapper;
use super::models::RawgSearchResponse;

/// Result count requested from the game search endpoint
const PAGE_SIZE: u32 = 10;

/// RAWG game catalog adapter
pub struct RawgAdapter {
    http_client: ProviderClient,
    base_url: String,
    api_key: String,
    mapper: RawgMapper,
}

impl RawgAdapter {
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        Ok(Self {
            http_client: ProviderClient::new("RAWG", config.timeout())?,
            base_url: "https://api.rawg.io".to_string(),
            api_key: config.rawg_api_key.clone(),
            mapper: RawgMapper::new(),
        })
    }
}

#[async_trait]
impl SearchProviderClient for RawgAdapter {
    fn category(&self) -> MediaCategory {
        MediaCategory::Game
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let url = format!(
            "{}/api/games?key={}&search={}&page_size={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query),
            PAGE_SIZE
        );

        log::info!("RAWG: Searching for '{}'", query);

        let response: RawgSearchResponse = self.http_client.get(&url).await?;
        let results = self.mapper.map_to_result_list(response.results);

        log::info!("RAWG: Found {} results for '{}'", results.len(), query);
        Ok(results)
    }
}
