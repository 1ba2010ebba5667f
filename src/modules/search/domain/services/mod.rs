pub mod category_router;
pub mod result_normalizer;
pub mod search_orchestrator;

// Primary exports
pub use category_router::{CategoryRouter, SearchRoute};
pub use result_normalizer::ResultNormalizer;
pub use search_orchestrator::SearchOrchestrator;
