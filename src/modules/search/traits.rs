use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Capability contract implemented by every catalog provider adapter.
///
/// One invocation issues exactly one outbound request and holds no
/// request-scoped state; an empty `Ok` list means the provider was reached
/// and matched nothing.
#[async_trait]
pub trait SearchProviderClient: Send + Sync {
    /// The category tag this adapter stamps on its results
    fn category(&self) -> MediaCategory;

    /// Search the provider's catalog
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>>;
}
