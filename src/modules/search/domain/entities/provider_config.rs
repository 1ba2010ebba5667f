use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// Provider credentials and limits, passed to each adapter at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub tmdb_api_key: String,
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub rawg_api_key: String,
    pub timeout_seconds: u32,
}

impl ProviderConfig {
    pub fn new(
        tmdb_api_key: String,
        naver_client_id: String,
        naver_client_secret: String,
        rawg_api_key: String,
    ) -> Self {
        Self {
            tmdb_api_key,
            naver_client_id,
            naver_client_secret,
            rawg_api_key,
            timeout_seconds: 10,
        }
    }

    /// Load credentials from the environment (`.env` supported)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self::new(
            Self::require_var("TMDB_API_KEY")?,
            Self::require_var("NAVER_CLIENT_ID")?,
            Self::require_var("NAVER_CLIENT_SECRET")?,
            Self::require_var("RAWG_API_KEY")?,
        ))
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u32) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }

    fn require_var(name: &str) -> AppResult<String> {
        std::env::var(name)
            .map_err(|_| AppError::InvalidInput(format!("{} not set in environment", name)))
    }
}
