//! No-op cache providers
//!
//! Store nothing, return nothing. For tests and for hosts that want a
//! capability satisfied without any caching behavior.

use std::time::Duration;

use armature_domain::error::Result;
use armature_domain::ports::cache::{DistributedCache, LocalCache};

/// Local cache that never stores anything
#[derive(Debug, Default)]
pub struct NullLocalCache;

impl NullLocalCache {
    /// Create a null local cache
    pub fn new() -> Self {
        Self
    }
}

impl LocalCache for NullLocalCache {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn remove_all(&self) -> Result<()> {
        Ok(())
    }

    fn entry_count(&self) -> usize {
        0
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Distributed cache that never stores anything
///
/// `increment` still returns the arithmetic result so rate-limit style
/// callers keep working; it just never persists.
#[derive(Debug, Default)]
pub struct NullDistributedCache;

impl NullDistributedCache {
    /// Create a null distributed cache
    pub fn new() -> Self {
        Self
    }
}

impl DistributedCache for NullDistributedCache {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn set_with_ttl(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    fn increment(&self, _key: &str, amount: i64) -> Result<i64> {
        Ok(amount)
    }

    fn remove(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    CacheProviderConfig, DistributedCacheProviderEntry, LocalCacheProviderEntry,
    DISTRIBUTED_CACHE_PROVIDERS, LOCAL_CACHE_PROVIDERS,
};

#[linkme::distributed_slice(LOCAL_CACHE_PROVIDERS)]
static NULL_LOCAL_PROVIDER: LocalCacheProviderEntry = LocalCacheProviderEntry {
    name: "null",
    description: "No-op local cache",
    factory: |_config: &CacheProviderConfig| Ok(std::sync::Arc::new(NullLocalCache::new())),
};

#[linkme::distributed_slice(DISTRIBUTED_CACHE_PROVIDERS)]
static NULL_DISTRIBUTED_PROVIDER: DistributedCacheProviderEntry = DistributedCacheProviderEntry {
    name: "null",
    description: "No-op distributed cache",
    factory: |_config: &CacheProviderConfig| Ok(std::sync::Arc::new(NullDistributedCache::new())),
};
