//! Cache Capability Ports
//!
//! Two caching capabilities are registered during startup: a process-local
//! cache and a distributed cache. Payloads are JSON strings, so any
//! serializable value can be cached without the port knowing its type.
//!
//! ## Provider Pattern
//!
//! Implementations register themselves in the provider registries declared
//! by `armature-application` and are selected by name per runtime mode. The
//! default distributed cache is a local-only emulator; swapping in a real
//! distributed store is a host concern and never changes this contract.

use std::time::Duration;

use crate::error::Result;

/// Process-local cache capability
///
/// Single-process, in-memory storage. Entry lifetime policy (capacity,
/// time-to-live) is fixed at construction from boot configuration.
pub trait LocalCache: Send + Sync {
    /// Get a cached JSON value, `None` when absent or expired
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a JSON value under `key`, replacing any existing entry
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry for `key`
    ///
    /// Returns `true` when an entry existed.
    fn remove(&self, key: &str) -> Result<bool>;

    /// Drop every entry
    fn remove_all(&self) -> Result<()>;

    /// Number of live entries
    fn entry_count(&self) -> usize;

    /// Identifier of this provider implementation (e.g. "moka", "memory")
    fn provider_name(&self) -> &str;
}

/// Distributed cache capability
///
/// Same key/value contract as [`LocalCache`] plus per-entry expiration and
/// an atomic counter, the operations a shared store has to support.
pub trait DistributedCache: Send + Sync {
    /// Get a cached JSON value, `None` when absent or expired
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a JSON value with no expiration
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Store a JSON value that expires after `ttl`
    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Atomically add `amount` to the counter at `key`, returning the new
    /// value; a missing counter starts at zero
    fn increment(&self, key: &str, amount: i64) -> Result<i64>;

    /// Remove the entry for `key`, returning whether it existed
    fn remove(&self, key: &str) -> Result<bool>;

    /// Identifier of this provider implementation (e.g. "emulator")
    fn provider_name(&self) -> &str;
}
