//! Request context and behavior registry implementations

/// Default behavior registry
pub mod behaviors;
/// Default request context
pub mod context;

pub use behaviors::DefaultBehaviorRegistry;
pub use context::DefaultRequestContext;
