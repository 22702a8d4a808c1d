//! Initialization orchestration
//!
//! The ordered, idempotent startup sequence and its collaborators:
//!
//! - [`orchestrator::Startup`]: runs the registration steps in order
//! - [`selector`]: picks concrete defaults per runtime mode
//! - [`components`]: discovers and orders the component set
//! - [`markers`]: runs component one-time initialization hooks
//! - [`texts`] / [`scripts`]: layered text and script registration
//! - [`watcher`]: post-startup file watchers

pub mod components;
pub mod markers;
pub mod orchestrator;
pub mod scripts;
pub mod selector;
pub mod texts;
pub mod watcher;

pub use components::ComponentSet;
pub use markers::MarkerLedger;
pub use orchestrator::Startup;
pub use selector::{Capability, ComponentSelector};
pub use watcher::ScriptWatcher;
