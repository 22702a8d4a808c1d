//! Moka local cache provider
//!
//! High-performance, concurrent in-memory cache built on Moka. This is the
//! managed-hosted default: hosting environments that keep a process alive
//! across many requests want real eviction and TTL behavior.

use std::time::Duration;

use moka::sync::Cache;

use armature_domain::error::Result;
use armature_domain::ports::cache::LocalCache;

use crate::constants::{CACHE_DEFAULT_CAPACITY, CACHE_DEFAULT_TTL_SECS};

/// Moka-based local cache
#[derive(Clone)]
pub struct MokaLocalCache {
    cache: Cache<String, String>,
}

impl Default for MokaLocalCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaLocalCache {
    /// Create a cache with default capacity and TTL
    pub fn new() -> Self {
        Self::with_config(
            CACHE_DEFAULT_CAPACITY,
            Duration::from_secs(CACHE_DEFAULT_TTL_SECS),
        )
    }

    /// Create a cache with explicit capacity and TTL
    pub fn with_config(capacity: usize, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity as u64)
            .time_to_live(time_to_live)
            .build();

        Self { cache }
    }
}

impl LocalCache for MokaLocalCache {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.cache.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let existed = self.cache.contains_key(key);
        self.cache.invalidate(key);
        Ok(existed)
    }

    fn remove_all(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
        Ok(())
    }

    fn entry_count(&self) -> usize {
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaLocalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaLocalCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    CacheProviderConfig, LocalCacheProviderEntry, LOCAL_CACHE_PROVIDERS,
};

#[linkme::distributed_slice(LOCAL_CACHE_PROVIDERS)]
static MOKA_PROVIDER: LocalCacheProviderEntry = LocalCacheProviderEntry {
    name: "moka",
    description: "Moka high-performance in-memory cache",
    factory: |config: &CacheProviderConfig| {
        let capacity = config.capacity.unwrap_or(CACHE_DEFAULT_CAPACITY);
        let ttl = Duration::from_secs(config.ttl_secs.unwrap_or(CACHE_DEFAULT_TTL_SECS));
        Ok(std::sync::Arc::new(MokaLocalCache::with_config(
            capacity, ttl,
        )))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_roundtrip() {
        let cache = MokaLocalCache::new();
        cache.set("user:1", r#"{"name":"ada"}"#).unwrap();

        assert_eq!(
            cache.get("user:1").unwrap().as_deref(),
            Some(r#"{"name":"ada"}"#)
        );
        assert!(cache.remove("user:1").unwrap());
        assert_eq!(cache.get("user:1").unwrap(), None);
        assert!(!cache.remove("user:1").unwrap());
    }

    #[test]
    fn remove_all_empties_the_cache() {
        let cache = MokaLocalCache::new();
        cache.set("a", "1").unwrap();
        cache.set("b", "2").unwrap();
        cache.remove_all().unwrap();
        assert_eq!(cache.entry_count(), 0);
    }
}
