//! Boot configuration
//!
//! Configuration for the composition root itself: which runtime mode the
//! process is hosted in, where the default providers read and write, and how
//! ambient logging is set up. Application-level settings are a separate
//! concern served by the `ConfigRepository` capability.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    BootConfig, CacheSettings, FolderLayout, LoggerSettings, LoggingConfig, RuntimeMode,
    SettingsConfig,
};
