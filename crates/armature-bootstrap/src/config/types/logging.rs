//! Ambient logging configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "info".to_string()
}

/// Configuration for the framework's own `tracing` output
///
/// This configures ambient diagnostics, not the `Logger` capability the
/// orchestrator registers for application code (see
/// [`super::app::LoggerSettings`] for that one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON-structured lines instead of human-readable ones
    #[serde(default)]
    pub json_format: bool,

    /// Optional file to mirror output into (daily rotation)
    #[serde(default)]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_format: false,
            file_output: None,
        }
    }
}
