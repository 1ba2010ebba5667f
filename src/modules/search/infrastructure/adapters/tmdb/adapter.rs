use async_trait::async_trait;

use crate::modules::search::domain::entities::ProviderConfig;
use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::modules::search::infrastructure::adapters::ResultMapper;
use crate::modules::search::infrastructure::http_client::ProviderClient;
use crate::modules::search::traits::SearchProviderClient;
use crate::shared::errors::AppResult;

use super::mapper::TmdbMapper;
use super::models::TmdbSearchResponse;

/// TMDB (The Movie Database) movie catalog adapter
pub struct TmdbAdapter {
    http_client: ProviderClient,
    base_url: String,
    api_key: String,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        Ok(Self {
            http_client: ProviderClient::new("TMDB", config.timeout())?,
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: config.tmdb_api_key.clone(),
            mapper: TmdbMapper::new(),
        })
    }
}

#[async_trait]
impl SearchProviderClient for TmdbAdapter {
    fn category(&self) -> MediaCategory {
        MediaCategory::Movie
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let url = format!(
            "{}/search/movie?api_key={}&query={}&language=ko-KR",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );

        log::info!("TMDB: Searching for '{}'", query);

        let response: TmdbSearchResponse = self.http_client.get(&url).await?;
        let results = self.mapper.map_to_result_list(response.results);

        log::info!("TMDB: Found {} results for '{}'", results.len(), query);
        Ok(results)
    }
}
