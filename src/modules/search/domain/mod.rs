pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::ProviderConfig;
pub use services::{CategoryRouter, SearchOrchestrator, SearchRoute};
pub use value_objects::{MediaCategory, SearchResult};
