//! Dynamic script registry implementations

/// Concurrent map script registry
pub mod registry;

pub use registry::DefaultDynamicScriptRegistry;
