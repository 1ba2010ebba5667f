pub mod adapters;
pub mod http_client;

// Re-export commonly used types
pub use adapters::{NaverAdapter, RawgAdapter, TmdbAdapter};
pub use http_client::ProviderClient;
