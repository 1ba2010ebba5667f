use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::modules::search::domain::entities::ProviderConfig;
use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::modules::search::infrastructure::adapters::ResultMapper;
use crate::modules::search::infrastructure::http_client::ProviderClient;
use crate::modules::search::traits::SearchProviderClient;
use crate::shared::errors::{AppError, AppResult};

use super::mapper::NaverMapper;
use super::models::NaverSearchResponse;

/// Result count requested from the book search endpoint
const DISPLAY_COUNT: u32 = 10;

/// Naver open API book catalog adapter
pub struct NaverAdapter {
    http_client: ProviderClient,
    base_url: String,
    client_id: String,
    client_secret: String,
    mapper: NaverMapper,
}

impl NaverAdapter {
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        Ok(Self {
            http_client: ProviderClient::new("Naver", config.timeout())?,
            base_url: "https://openapi.naver.com".to_string(),
            client_id: config.naver_client_id.clone(),
            client_secret: config.naver_client_secret.clone(),
            mapper: NaverMapper::new(),
        })
    }

    /// Naver authenticates with header credentials, not query params
    fn credential_headers(&self) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Naver-Client-Id",
            HeaderValue::from_str(&self.client_id)
                .map_err(|_| AppError::InvalidInput("Invalid Naver client id".to_string()))?,
        );
        headers.insert(
            "X-Naver-Client-Secret",
            HeaderValue::from_str(&self.client_secret)
                .map_err(|_| AppError::InvalidInput("Invalid Naver client secret".to_string()))?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl SearchProviderClient for NaverAdapter {
    fn category(&self) -> MediaCategory {
        MediaCategory::Book
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let url = format!(
            "{}/v1/search/book.json?query={}&display={}",
            self.base_url,
            urlencoding::encode(query),
            DISPLAY_COUNT
        );

        log::info!("Naver: Searching for '{}'", query);

        let headers = self.credential_headers()?;
        let response: NaverSearchResponse = self.http_client.get_with_headers(&url, headers).await?;
        let results = self.mapper.map_to_result_list(response.items);

        log::info!("Naver: Found {} results for '{}'", results.len(), query);
        Ok(results)
    }
}
