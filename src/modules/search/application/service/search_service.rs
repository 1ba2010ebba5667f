use std::sync::Arc;
use std::time::Duration;

use crate::modules::search::application::dto::SearchRequest;
use crate::modules::search::domain::entities::ProviderConfig;
use crate::modules::search::domain::services::SearchOrchestrator;
use crate::modules::search::domain::value_objects::SearchResult;
use crate::modules::search::infrastructure::adapters::{NaverAdapter, RawgAdapter, TmdbAdapter};
use crate::modules::search::traits::SearchProviderClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

/// Application facade over the search engine.
///
/// The sole entry point consumed by outer layers. Apart from invalid input,
/// the caller always receives a list: orchestration faults collapse to an
/// empty one, and "zero matches" is indistinguishable from "all providers
/// failed".
pub struct SearchService {
    orchestrator: SearchOrchestrator,
}

impl SearchService {
    /// Wire the three catalog adapters from explicit configuration
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        let clients: Vec<Arc<dyn SearchProviderClient>> = vec![
            Arc::new(TmdbAdapter::new(config)?),
            Arc::new(NaverAdapter::new(config)?),
            Arc::new(RawgAdapter::new(config)?),
        ];
        Ok(Self::with_clients(clients, config.timeout()))
    }

    /// Wire from pre-built adapters (tests and custom provider sets)
    pub fn with_clients(
        clients: Vec<Arc<dyn SearchProviderClient>>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            orchestrator: SearchOrchestrator::new(clients, call_timeout),
        }
    }

    pub async fn search(&self, request: SearchRequest) -> AppResult<Vec<SearchResult>> {
        match self
            .orchestrator
            .search(&request.query, &request.category)
            .await
        {
            Ok(results) => {
                LogContext::search_operation(&request.query, None, Some(results.len()));
                Ok(results)
            }
            Err(e @ AppError::InvalidInput(_)) => Err(e),
            Err(e) => {
                // Internal faults collapse to an empty list; only invalid
                // input ever surfaces to the caller.
                LogContext::error_with_context(
                    &e,
                    &format!("Search orchestration failed for '{}'", request.query),
                );
                Ok(Vec::new())
            }
        }
    }
}
