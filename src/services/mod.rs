// Service exports
pub mod cache;
pub mod dataset;

pub use cache::{CacheKey, CacheStats, RecommendationCache};
pub use dataset::{DatasetError, DatasetLoader, REQUIRED_COLUMNS};
