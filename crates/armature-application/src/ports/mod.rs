//! Application Port Surfaces

/// Provider registry system
pub mod registry;

pub use registry::*;
