pub mod modules;
pub mod shared;

// Re-exports for library consumers
pub use modules::search::application::{SearchRequest, SearchService};
pub use modules::search::domain::entities::ProviderConfig;
pub use modules::search::domain::value_objects::{MediaCategory, SearchResult};
pub use modules::search::traits::SearchProviderClient;
pub use shared::errors::{AppError, AppResult};
