//! Shared HTTP plumbing for the provider adapters.
//!
//! One call issues exactly one outbound GET, no retries; a failed call
//! surfaces as that provider's failure.

use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// Thin JSON-over-GET client shared by the provider adapters
pub struct ProviderClient {
    client: Client,
    provider_name: String,
}

impl ProviderClient {
    pub fn new(provider_name: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("culturelog-search/0.1")
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            provider_name: provider_name.to_string(),
        })
    }

    /// Make a GET request and parse the JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.get_with_headers(url, HeaderMap::new()).await
    }

    /// Make a GET request with provider-specific headers (credential headers etc.)
    pub async fn get_with_headers<T>(&self, url: &str, headers: HeaderMap) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).headers(headers).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ApiError(format!(
                "{} API returned error: {}",
                self.provider_name,
                response.status()
            )));
        }

        self.parse_response(response).await
    }

    /// Parse the response body, keeping a short payload preview in the error
    async fn parse_response<T>(&self, response: reqwest::Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            let preview: String = response_text.chars().take(200).collect();
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name, e, preview
            ))
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
