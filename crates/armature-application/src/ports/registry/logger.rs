//! Logger Provider Registry

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use armature_domain::ports::logging::{LogLevel, Logger};

/// Configuration for logger provider creation
#[derive(Debug, Clone, Default)]
pub struct LoggerProviderConfig {
    /// Provider name (e.g. "file", "null")
    pub provider: String,
    /// Log file path, for file-backed providers
    pub path: Option<PathBuf>,
    /// Minimum level the sink accepts
    pub min_level: Option<LogLevel>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl LoggerProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the log file path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the minimum accepted level
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }
}

/// Registry entry for logger providers
pub struct LoggerProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&LoggerProviderConfig) -> Result<Arc<dyn Logger>, String>,
}

#[linkme::distributed_slice]
pub static LOGGER_PROVIDERS: [LoggerProviderEntry] = [..];

/// Resolve a logger provider by configured name
pub fn resolve_logger_provider(config: &LoggerProviderConfig) -> Result<Arc<dyn Logger>, String> {
    for entry in LOGGER_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = LOGGER_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown logger provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered logger providers as (name, description)
pub fn list_logger_providers() -> Vec<(&'static str, &'static str)> {
    LOGGER_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
