//! # Armature
//!
//! Composition root of the Armature web-application framework. At process
//! start it wires cross-cutting services (caching, configuration, logging,
//! localization, dynamic script registration) into a shared service
//! registry, so the rest of the application resolves them by capability
//! rather than by concrete type.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use armature::bootstrap::{ConfigLoader, Startup};
//! use armature::domain::{LocalCache, ServiceRegistry};
//!
//! let config = Arc::new(ConfigLoader::new().load()?);
//! armature::bootstrap::logging::init_logging(&config.logging)?;
//!
//! let registry = Arc::new(ServiceRegistry::new());
//! Startup::new(registry.clone(), config).run()?;
//!
//! let cache = registry.resolve::<dyn LocalCache>()?;
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - capability ports, the service registry and error taxonomy
//! - `application` - provider registries and component manifests
//! - `providers` - default capability implementations
//! - `bootstrap` - the initialization orchestrator and boot configuration

/// Domain layer - capability ports, registry and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use armature_domain::*;
}

/// Application layer - provider registries and component manifests
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use armature_application::*;
}

/// Provider implementations - default capability providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use armature_providers::*;
}

/// Bootstrap layer - orchestrator, selector and boot configuration
///
/// Re-exports from the bootstrap crate for convenience
pub mod bootstrap {
    pub use armature_bootstrap::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result, ServiceRegistry};

// Re-export the composition entry points at the crate root
pub use bootstrap::{BootConfig, ConfigLoader, RuntimeMode, Startup};
