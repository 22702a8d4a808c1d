//! Capability Port Interfaces
//!
//! Defines the boundary contracts the orchestrator registers and the rest of
//! the application resolves. Ports describe behavior only; concrete
//! implementations live in `armature-providers` (or in the host application,
//! pre-registered before orchestration runs).
//!
//! ## Organization
//!
//! | Port | Capability |
//! |------|------------|
//! | [`LocalCache`] / [`DistributedCache`] | caching |
//! | [`ConfigRepository`] | configuration, usually named `"Application"` |
//! | [`Logger`] | application logging sink |
//! | [`LocalTextRegistry`] | localized text lookup |
//! | [`DynamicScriptRegistry`] | client-visible script payloads |
//! | [`RequestContext`] | ambient request-scoped values |
//! | [`BehaviorRegistry`] | implicit request behaviors |

/// Caching capability ports
pub mod cache;
/// Configuration repository port
pub mod config;
/// Logging capability port
pub mod logging;
/// Request context and behavior registry ports
pub mod request;
/// Dynamic script registry port
pub mod scripts;
/// Localized text registry port
pub mod texts;

pub use cache::{DistributedCache, LocalCache};
pub use config::{load_section, ConfigRepository};
pub use logging::{LogEntry, LogLevel, Logger};
pub use request::{BehaviorDescriptor, BehaviorRegistry, RequestContext};
pub use scripts::{DynamicScript, DynamicScriptRegistry, ScriptKind};
pub use texts::{LocalText, LocalTextRegistry, INVARIANT_LOCALE};
