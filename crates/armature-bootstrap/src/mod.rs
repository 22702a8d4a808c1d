//! Composition Root - Armature
//!
//! Wires the framework's cross-cutting services into a shared
//! [`armature_domain::ServiceRegistry`] at process start. The heart of the
//! crate is [`startup::Startup`]: a fixed, ordered sequence of idempotent
//! registration steps, each guarded so that host wiring done before
//! orchestration is never clobbered.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use armature_bootstrap::config::ConfigLoader;
//! use armature_bootstrap::startup::Startup;
//! use armature_domain::ServiceRegistry;
//!
//! let config = Arc::new(ConfigLoader::new().load()?);
//! armature_bootstrap::logging::init_logging(&config.logging)?;
//!
//! let registry = Arc::new(ServiceRegistry::new());
//! Startup::new(registry.clone(), config).run()?;
//!
//! // Orchestration is complete; request handling may begin.
//! let cache = registry.resolve::<dyn armature_domain::LocalCache>()?;
//! ```
//!
//! Orchestration must fully complete before concurrent traffic begins; the
//! registry contract assumes all startup writes happen-before request-time
//! reads.

pub mod config;
pub mod constants;
pub mod logging;
pub mod startup;

// Re-export the provider crate so linking armature-bootstrap always carries
// the default providers' registry entries, and hosts get one import for the
// whole stack.
pub use armature_providers as providers;

pub use config::{BootConfig, ConfigLoader, RuntimeMode};
pub use startup::Startup;
