//! Logging Capability Port
//!
//! The logger registered here is the *application* log sink capability, the
//! one request-handling code resolves and writes to. The framework's own
//! diagnostics go through `tracing` and are configured separately by the
//! bootstrap crate.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Unexpected but recoverable
    Warn,
    /// Operation failed
    Error,
    /// Process-level failure
    Fatal,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity
    pub level: LogLevel,
    /// Message text
    pub message: String,
    /// Originating component or module, if known
    pub target: Option<String>,
    /// Wall-clock time the entry was produced
    pub timestamp: SystemTime,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn new<S: Into<String>>(level: LogLevel, message: S) -> Self {
        Self {
            level,
            message: message.into(),
            target: None,
            timestamp: SystemTime::now(),
        }
    }

    /// Set the originating target
    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Application log sink capability
pub trait Logger: Send + Sync {
    /// Write one entry to the sink
    fn write(&self, entry: &LogEntry) -> Result<()>;

    /// Identifier of this provider implementation (e.g. "file")
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn entry_builder_sets_target() {
        let entry = LogEntry::new(LogLevel::Warn, "slow query").with_target("orders");
        assert_eq!(entry.target.as_deref(), Some("orders"));
        assert_eq!(entry.level, LogLevel::Warn);
    }
}
