//! Provider Registry System
//!
//! Auto-registration infrastructure for capability providers. Uses the
//! `linkme` crate for compile-time registration of providers that can be
//! discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(SLICE)]      │
//! │                        static ENTRY: ...ProviderEntry = ...     │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static SLICE: [Entry] = [..]         │
//! │                              ↓                                  │
//! │  3. Selector queries:  resolve_*_provider(&config)              │
//! │                              ↓                                  │
//! │  4. Mode selects:      managed-hosted → "moka" → MokaLocalCache │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Provider (in armature-providers)
//!
//! ```ignore
//! use armature_application::ports::registry::{LocalCacheProviderEntry, LOCAL_CACHE_PROVIDERS};
//!
//! #[linkme::distributed_slice(LOCAL_CACHE_PROVIDERS)]
//! static MOKA_PROVIDER: LocalCacheProviderEntry = LocalCacheProviderEntry {
//!     name: "moka",
//!     description: "Moka high-performance in-memory cache",
//!     factory: |config| Ok(Arc::new(MokaLocalCache::from_config(config))),
//! };
//! ```

pub mod cache;
pub mod config;
pub mod logger;
pub mod services;

// Re-export all registry types and functions
pub use cache::{
    list_distributed_cache_providers, list_local_cache_providers,
    resolve_distributed_cache_provider, resolve_local_cache_provider, CacheProviderConfig,
    DistributedCacheProviderEntry, LocalCacheProviderEntry, DISTRIBUTED_CACHE_PROVIDERS,
    LOCAL_CACHE_PROVIDERS,
};
pub use config::{
    list_config_providers, resolve_config_provider, ConfigProviderConfig, ConfigProviderEntry,
    CONFIG_PROVIDERS,
};
pub use logger::{
    list_logger_providers, resolve_logger_provider, LoggerProviderConfig, LoggerProviderEntry,
    LOGGER_PROVIDERS,
};
pub use services::{
    list_service_providers, resolve_service_provider, ServiceProviderConfig, ServiceProviderEntry,
    BEHAVIOR_REGISTRY_PROVIDERS, REQUEST_CONTEXT_PROVIDERS, SCRIPT_REGISTRY_PROVIDERS,
    TEXT_REGISTRY_PROVIDERS,
};
