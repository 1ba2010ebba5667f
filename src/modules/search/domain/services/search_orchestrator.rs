use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;

use crate::modules::search::domain::services::category_router::CategoryRouter;
use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::modules::search::traits::SearchProviderClient;
use crate::shared::errors::AppResult;
use crate::shared::utils::{TimedOperation, Validator};

/// Fan-out/fan-in coordinator across the configured provider adapters
///
/// One search triggers at most one wave of provider calls: every routed call
/// is spawned before any is awaited, and the join is a barrier, so a fast
/// provider never short-circuits the others. A provider that fails or times
/// out contributes zero results without disturbing the rest of the wave.
pub struct SearchOrchestrator {
    clients: Vec<Arc<dyn SearchProviderClient>>,
    call_timeout: Duration,
}

impl SearchOrchestrator {
    pub fn new(clients: Vec<Arc<dyn SearchProviderClient>>, call_timeout: Duration) -> Self {
        Self {
            clients,
            call_timeout,
        }
    }

    /// Execute one search wave across the providers selected for `category`.
    ///
    /// The only error this returns is invalid input, raised before any
    /// provider is contacted.
    pub async fn search(&self, query: &str, category: &str) -> AppResult<Vec<SearchResult>> {
        Validator::validate_search_query(query)?;

        let routes = CategoryRouter::resolve(category);
        if routes.is_empty() {
            log::debug!("No providers selected for category '{}'", category);
            return Ok(Vec::new());
        }

        let timer = TimedOperation::new(&format!("search '{}' [{}]", query, category));

        let mut tasks = Vec::with_capacity(routes.len());
        for route in routes {
            let client = match self.client_for(route.provider) {
                Some(client) => client,
                None => {
                    log::warn!("No adapter registered for provider {}, skipping", route.provider);
                    continue;
                }
            };

            let query = query.to_string();
            let call_timeout = self.call_timeout;

            let task = tokio::spawn(async move {
                match timeout(call_timeout, client.search(&query)).await {
                    Ok(Ok(results)) => {
                        log::debug!(
                            "Provider {} returned {} results for '{}'",
                            route.provider,
                            results.len(),
                            query
                        );
                        Some(route.relabel(results))
                    }
                    Ok(Err(e)) => {
                        log::warn!("Provider {} failed for '{}': {}", route.provider, query, e);
                        None
                    }
                    Err(_) => {
                        log::warn!(
                            "Provider {} timed out after {:?} for '{}'",
                            route.provider,
                            call_timeout,
                            query
                        );
                        None
                    }
                }
            });
            tasks.push(task);
        }

        // Join-all barrier: tasks were spawned in route order and are
        // collected in that same order regardless of completion order.
        let mut merged = Vec::new();
        for outcome in join_all(tasks).await {
            match outcome {
                Ok(Some(results)) => merged.extend(results),
                Ok(None) => {}
                Err(e) => log::warn!("Provider task aborted: {}", e),
            }
        }

        timer.finish_with_info(&format!("{} results", merged.len()));
        Ok(merged)
    }

    fn client_for(&self, category: MediaCategory) -> Option<Arc<dyn SearchProviderClient>> {
        self.clients
            .iter()
            .find(|client| client.category() == category)
            .cloned()
    }
}
