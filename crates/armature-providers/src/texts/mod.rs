//! Local text registry implementations

/// Concurrent map text registry with locale fallback
pub mod registry;

pub use registry::DefaultLocalTextRegistry;
