//! HashMap local cache provider
//!
//! Framework-native cache for lightweight hosting: a plain locked map with
//! no eviction. Suits short-lived processes and tests where TTL churn is
//! irrelevant.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use armature_domain::error::{Error, Result};
use armature_domain::ports::cache::LocalCache;

/// Map-backed local cache without eviction
#[derive(Debug, Default)]
pub struct MemoryLocalCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryLocalCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.entries
            .read()
            .map_err(|_| Error::cache("cache lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.entries
            .write()
            .map_err(|_| Error::cache("cache lock poisoned"))
    }
}

impl LocalCache for MemoryLocalCache {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.write()?.remove(key).is_some())
    }

    fn remove_all(&self) -> Result<()> {
        self.write()?.clear();
        Ok(())
    }

    fn entry_count(&self) -> usize {
        self.read().map(|entries| entries.len()).unwrap_or(0)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    CacheProviderConfig, LocalCacheProviderEntry, LOCAL_CACHE_PROVIDERS,
};

#[linkme::distributed_slice(LOCAL_CACHE_PROVIDERS)]
static MEMORY_PROVIDER: LocalCacheProviderEntry = LocalCacheProviderEntry {
    name: "memory",
    description: "Framework-native map cache without eviction",
    factory: |_config: &CacheProviderConfig| Ok(std::sync::Arc::new(MemoryLocalCache::new())),
};
