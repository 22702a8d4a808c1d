//! Cache provider implementations
//!
//! Local caches: [`MokaLocalCache`] (managed-hosted default) and
//! [`MemoryLocalCache`] (lightweight-hosted default). Distributed cache:
//! [`DistributedCacheEmulator`], a local-only stand-in that satisfies the
//! distributed contract inside a single process. Null providers exist for
//! tests and opt-out hosts.

/// Distributed cache emulator
pub mod emulator;
/// HashMap-backed local cache
pub mod memory;
/// Moka-backed local cache
#[cfg(feature = "cache-moka")]
pub mod moka;
/// No-op cache providers
pub mod null;

pub use emulator::DistributedCacheEmulator;
pub use memory::MemoryLocalCache;
#[cfg(feature = "cache-moka")]
pub use moka::MokaLocalCache;
pub use null::{NullDistributedCache, NullLocalCache};
