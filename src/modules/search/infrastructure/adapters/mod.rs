pub mod naver;
pub mod rawg;
pub mod tmdb;

// Use specific imports to avoid conflicts
pub use naver::NaverAdapter;
pub use rawg::RawgAdapter;
pub use tmdb::TmdbAdapter;

use crate::modules::search::domain::value_objects::SearchResult;

/// Converts one provider's payload items into canonical search results.
///
/// Mapping never fails: absent upstream fields fall back to the optional-field
/// defaults instead of raising.
pub trait ResultMapper<T> {
    /// Map one provider item to the canonical result
    fn map_to_result(&self, source: T) -> SearchResult;

    /// Map a list of provider items
    fn map_to_result_list(&self, sources: Vec<T>) -> Vec<SearchResult> {
        sources
            .into_iter()
            .map(|source| self.map_to_result(source))
            .collect()
    }
}
