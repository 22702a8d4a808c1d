//! Distributed cache emulator
//!
//! Local-only stand-in for a distributed cache. Single-node deployments get
//! the full `DistributedCache` contract (expiration, atomic counters)
//! without any external store; swapping in a real backend later changes
//! nothing for consumers. Expired entries are dropped lazily on access.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use armature_domain::error::{Error, Result};
use armature_domain::ports::cache::DistributedCache;

#[derive(Debug, Clone)]
struct EmulatedEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl EmulatedEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// In-process emulator for the distributed cache capability
#[derive(Debug, Default)]
pub struct DistributedCacheEmulator {
    entries: Mutex<HashMap<String, EmulatedEntry>>,
}

impl DistributedCacheEmulator {
    /// Create an empty emulator
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, EmulatedEntry>>> {
        self.entries
            .lock()
            .map_err(|_| Error::cache("cache lock poisoned"))
    }

    fn live_value(
        entries: &mut HashMap<String, EmulatedEntry>,
        key: &str,
        now: Instant,
    ) -> Option<String> {
        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }
}

impl DistributedCache for DistributedCacheEmulator {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.lock()?;
        Ok(Self::live_value(&mut entries, key, Instant::now()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.lock()?;
        entries.insert(
            key.to_string(),
            EmulatedEntry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(())
    }

    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut entries = self.lock()?;
        entries.insert(
            key.to_string(),
            EmulatedEntry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + ttl),
            },
        );
        Ok(())
    }

    fn increment(&self, key: &str, amount: i64) -> Result<i64> {
        let mut entries = self.lock()?;
        let now = Instant::now();

        let current = match Self::live_value(&mut entries, key, now) {
            Some(value) => value.parse::<i64>().map_err(|_| {
                Error::cache(format!("counter at '{key}' holds a non-numeric value"))
            })?,
            None => 0,
        };

        let next = current + amount;
        entries.insert(
            key.to_string(),
            EmulatedEntry {
                value: next.to_string(),
                expires_at: None,
            },
        );
        Ok(next)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        let was_live = Self::live_value(&mut entries, key, now).is_some();
        entries.remove(key);
        Ok(was_live)
    }

    fn provider_name(&self) -> &str {
        "emulator"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    CacheProviderConfig, DistributedCacheProviderEntry, DISTRIBUTED_CACHE_PROVIDERS,
};

#[linkme::distributed_slice(DISTRIBUTED_CACHE_PROVIDERS)]
static EMULATOR_PROVIDER: DistributedCacheProviderEntry = DistributedCacheProviderEntry {
    name: "emulator",
    description: "Local-only distributed cache emulator",
    factory: |_config: &CacheProviderConfig| {
        Ok(std::sync::Arc::new(DistributedCacheEmulator::new()))
    },
};
