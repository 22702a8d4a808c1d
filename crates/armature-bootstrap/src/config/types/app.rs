//! Top-level boot configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use armature_domain::ports::logging::LogLevel;

use super::cache::CacheSettings;
use super::folders::FolderLayout;
use super::logging::LoggingConfig;
use super::mode::RuntimeMode;

fn default_settings_path() -> PathBuf {
    PathBuf::from("appsettings.json")
}

fn default_settings_env_prefix() -> String {
    "APP".to_string()
}

/// Where the application configuration repository reads from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// JSON settings file path
    #[serde(default = "default_settings_path")]
    pub path: PathBuf,

    /// Environment prefix for settings overrides
    #[serde(default = "default_settings_env_prefix")]
    pub env_prefix: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
            env_prefix: default_settings_env_prefix(),
        }
    }
}

fn default_logger_path() -> PathBuf {
    PathBuf::from("app_data/log/armature.log")
}

fn default_logger_min_level() -> LogLevel {
    LogLevel::Info
}

/// Settings for the registered `Logger` capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log file path
    #[serde(default = "default_logger_path")]
    pub path: PathBuf,

    /// Minimum level the sink accepts
    #[serde(default = "default_logger_min_level")]
    pub min_level: LogLevel,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            path: default_logger_path(),
            min_level: default_logger_min_level(),
        }
    }
}

/// Boot configuration for the composition root
///
/// ```json
/// {
///   "mode": "managed-hosted",
///   "cache": { "local_capacity": 50000 },
///   "folders": { "watch_for_changes": true }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootConfig {
    /// Hosting environment, fixed for the process lifetime
    #[serde(default)]
    pub mode: RuntimeMode,

    /// Ambient tracing configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default cache sizing
    #[serde(default)]
    pub cache: CacheSettings,

    /// Registered logger capability settings
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Application settings repository source
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Overlay and watch folder layout
    #[serde(default)]
    pub folders: FolderLayout,
}
