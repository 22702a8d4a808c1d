//! # Armature - Provider Implementations
//!
//! Default implementations of the capability ports defined in
//! `armature-domain`. Each provider registers itself into the linkme
//! registry slices declared by `armature-application`, which is how the
//! component selector finds it by name at startup.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Local cache | `LocalCache` | Moka, Memory, Null |
//! | Distributed cache | `DistributedCache` | Emulator, Null |
//! | Configuration | `ConfigRepository` | JsonSettings, Null |
//! | Logger | `Logger` | File, Null |
//! | Local texts | `LocalTextRegistry` | Default |
//! | Dynamic scripts | `DynamicScriptRegistry` | Default |
//! | Request context | `RequestContext` | Default |
//! | Behaviors | `BehaviorRegistry` | Default |
//!
//! ## Feature Flags
//!
//! The moka cache can be disabled for minimal builds:
//!
//! ```toml
//! [dependencies]
//! armature-providers = { version = "0.3", default-features = false }
//! ```
//!
//! With `cache-moka` off, the managed-hosted local cache default cannot be
//! constructed and startup fails with a configuration error; select the
//! lightweight mode or register a cache before orchestration instead.

// Re-export armature-domain types commonly used with providers
pub use armature_domain::error::{Error, Result};
pub use armature_domain::ports::{
    BehaviorRegistry, ConfigRepository, DistributedCache, DynamicScriptRegistry, LocalCache,
    LocalTextRegistry, Logger, RequestContext,
};

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
pub mod cache;

/// Configuration repository implementations
pub mod config;

/// Logger implementations
pub mod logging;

/// Request context and behavior registry implementations
pub mod request;

/// Dynamic script registry implementations
pub mod scripts;

/// Local text registry implementations
pub mod texts;
