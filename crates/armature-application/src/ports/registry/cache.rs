//! Cache Provider Registries
//!
//! Auto-registration for the two cache capabilities. Local and distributed
//! providers register into separate slices because the component selector
//! wires them independently, but they share one configuration shape.

use std::collections::HashMap;
use std::sync::Arc;

use armature_domain::ports::cache::{DistributedCache, LocalCache};

/// Configuration for cache provider creation
///
/// Contains everything a cache provider might need. Providers use what they
/// need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CacheProviderConfig {
    /// Provider name (e.g. "moka", "memory", "emulator", "null")
    pub provider: String,
    /// Maximum number of entries
    pub capacity: Option<usize>,
    /// Default time-to-live in seconds
    pub ttl_secs: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl CacheProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the entry capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the TTL in seconds
    pub fn with_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = Some(ttl_secs);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for local cache providers
pub struct LocalCacheProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&CacheProviderConfig) -> Result<Arc<dyn LocalCache>, String>,
}

/// Registry entry for distributed cache providers
pub struct DistributedCacheProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&CacheProviderConfig) -> Result<Arc<dyn DistributedCache>, String>,
}

// Providers submit entries at compile time via linkme
#[linkme::distributed_slice]
pub static LOCAL_CACHE_PROVIDERS: [LocalCacheProviderEntry] = [..];

#[linkme::distributed_slice]
pub static DISTRIBUTED_CACHE_PROVIDERS: [DistributedCacheProviderEntry] = [..];

/// Resolve a local cache provider by configured name
///
/// # Errors
/// Returns a message naming the available providers when no registered
/// provider matches; the caller treats that as a fatal configuration error.
pub fn resolve_local_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn LocalCache>, String> {
    for entry in LOCAL_CACHE_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = LOCAL_CACHE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown local cache provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// Resolve a distributed cache provider by configured name
pub fn resolve_distributed_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn DistributedCache>, String> {
    for entry in DISTRIBUTED_CACHE_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = DISTRIBUTED_CACHE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown distributed cache provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered local cache providers as (name, description)
pub fn list_local_cache_providers() -> Vec<(&'static str, &'static str)> {
    LOCAL_CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// List all registered distributed cache providers as (name, description)
pub fn list_distributed_cache_providers() -> Vec<(&'static str, &'static str)> {
    DISTRIBUTED_CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = CacheProviderConfig::new("moka")
            .with_capacity(10_000)
            .with_ttl_secs(300)
            .with_extra("shards", "8");

        assert_eq!(config.provider, "moka");
        assert_eq!(config.capacity, Some(10_000));
        assert_eq!(config.ttl_secs, Some(300));
        assert_eq!(config.extra.get("shards"), Some(&"8".to_string()));
    }

    #[test]
    fn unknown_provider_error_lists_available() {
        let config = CacheProviderConfig::new("nonexistent_provider_xyz");
        let err = match resolve_local_cache_provider(&config) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.contains("Unknown local cache provider"));
        assert!(err.contains("Available providers"));
    }
}
