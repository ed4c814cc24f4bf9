use crate::models::{SchemeSummary, UserProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// In-process cache of recommendation results
///
/// The dataset never changes after startup and recommendation is
/// deterministic, so a cached result stays valid until it expires.
pub struct RecommendationCache {
    l1_cache: moka::future::Cache<String, Arc<Vec<SchemeSummary>>>,
    ttl_secs: u64,
}

impl RecommendationCache {
    /// Create a new cache
    pub fn new(l1_size: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { l1_cache, ttl_secs }
    }

    /// Get a cached result
    pub async fn get(&self, key: &str) -> Option<Arc<Vec<SchemeSummary>>> {
        let hit = self.l1_cache.get(key).await;
        if hit.is_some() {
            tracing::trace!("Cache hit: {}", key);
        } else {
            tracing::trace!("Cache miss: {}", key);
        }
        hit
    }

    /// Store a result
    pub async fn set(&self, key: String, value: Arc<Vec<SchemeSummary>>) {
        tracing::trace!("Cache set: {}", key);
        self.l1_cache.insert(key, value).await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            l1_size: self.l1_cache.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub l1_size: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a recommendation request
    ///
    /// Tags are sorted and de-duplicated, so their order does not matter.
    pub fn recommendation(profile: &UserProfile, k: usize) -> String {
        let mut tags: Vec<&str> = profile.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags.dedup();

        format!(
            "recommend:{}:{}:{}:{}:{}:{}:{}",
            k,
            profile.age,
            profile.gender,
            profile.education,
            profile.area,
            profile.state,
            tags.join("|")
        )
    }
}
