//! File logger provider
//!
//! The default application log sink on every runtime mode: appends one
//! formatted line per entry to a log file. Entries below the configured
//! minimum level are dropped before formatting.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};

use armature_domain::error::{Error, Result};
use armature_domain::ports::logging::{LogEntry, LogLevel, Logger};

use crate::constants::LOGGER_DEFAULT_FILE;

/// Append-only file logger
pub struct FileLogger {
    path: PathBuf,
    min_level: LogLevel,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open (or create) the log file at `path`
    pub fn create(path: impl AsRef<Path>, min_level: LogLevel) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::io_with_source(
                        format!("failed to create log directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                Error::io_with_source(format!("failed to open log file {}", path.display()), e)
            })?;

        Ok(Self {
            path,
            min_level,
            file: Mutex::new(file),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(entry: &LogEntry) -> String {
        let timestamp: DateTime<Utc> = entry.timestamp.into();
        let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        match &entry.target {
            Some(target) => format!("{timestamp} [{}] {target}: {}\n", entry.level, entry.message),
            None => format!("{timestamp} [{}] {}\n", entry.level, entry.message),
        }
    }
}

impl Logger for FileLogger {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        if entry.level < self.min_level {
            return Ok(());
        }

        let line = Self::format_line(entry);
        let mut file = self
            .file
            .lock()
            .map_err(|_| Error::logging("log file lock poisoned"))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| Error::io_with_source("failed to write log entry", e))
    }

    fn provider_name(&self) -> &str {
        "file"
    }
}

impl std::fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLogger")
            .field("path", &self.path)
            .field("min_level", &self.min_level)
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    LoggerProviderConfig, LoggerProviderEntry, LOGGER_PROVIDERS,
};

#[linkme::distributed_slice(LOGGER_PROVIDERS)]
static FILE_PROVIDER: LoggerProviderEntry = LoggerProviderEntry {
    name: "file",
    description: "Append-only file logger",
    factory: |config: &LoggerProviderConfig| {
        let path = config
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOGGER_DEFAULT_FILE));
        let min_level = config.min_level.unwrap_or(LogLevel::Info);
        let logger = FileLogger::create(path, min_level).map_err(|e| e.to_string())?;
        Ok(std::sync::Arc::new(logger))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_entries_at_or_above_min_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = FileLogger::create(&path, LogLevel::Info).unwrap();

        logger
            .write(&LogEntry::new(LogLevel::Debug, "dropped"))
            .unwrap();
        logger
            .write(&LogEntry::new(LogLevel::Error, "disk full").with_target("storage"))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("dropped"));
        assert!(contents.contains("[ERROR] storage: disk full"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/nested/app.log");
        let logger = FileLogger::create(&path, LogLevel::Debug).unwrap();
        logger.write(&LogEntry::new(LogLevel::Info, "hi")).unwrap();
        assert!(path.exists());
    }
}
