pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::{SearchRequest, SearchService};
pub use domain::value_objects::{MediaCategory, SearchResult};
pub use traits::SearchProviderClient;
