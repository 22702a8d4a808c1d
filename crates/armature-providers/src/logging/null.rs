//! No-op logger

use armature_domain::error::Result;
use armature_domain::ports::logging::{LogEntry, Logger};

/// Logger that discards every entry
#[derive(Debug, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Create a null logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn write(&self, _entry: &LogEntry) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    LoggerProviderConfig, LoggerProviderEntry, LOGGER_PROVIDERS,
};

#[linkme::distributed_slice(LOGGER_PROVIDERS)]
static NULL_LOGGER_PROVIDER: LoggerProviderEntry = LoggerProviderEntry {
    name: "null",
    description: "Logger that discards entries",
    factory: |_config: &LoggerProviderConfig| Ok(std::sync::Arc::new(NullLogger::new())),
};
