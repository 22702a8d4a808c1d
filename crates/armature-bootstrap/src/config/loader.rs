//! Boot configuration loader
//!
//! Loads [`BootConfig`] by merging, in order (later sources override
//! earlier): serialized defaults, a JSON configuration file, and
//! `ARMATURE_*` environment variables.

use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use tracing::{info, warn};

use armature_domain::error::{Error, Result};

use crate::config::BootConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<BootConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(BootConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Json::file(config_path));
                info!("Boot configuration loaded from {}", config_path.display());
            } else {
                warn!(
                    "Boot configuration file not found: {}",
                    config_path.display()
                );
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Json::file(&default_path));
            info!("Boot configuration loaded from {}", default_path.display());
        }

        // Add environment variables (e.g. ARMATURE_MODE=lightweight-hosted)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)));

        let config: BootConfig = figment
            .extract()
            .map_err(|e| Error::configuration_with_source("failed to load boot configuration", e))?;

        validate_boot_config(&config)?;

        Ok(config)
    }

    /// Get the configured file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the default configuration file, trying common locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate boot configuration values
fn validate_boot_config(config: &BootConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;

    if config.cache.local_capacity == 0 {
        return Err(Error::configuration(
            "cache.local_capacity must be greater than zero",
        ));
    }

    if config.settings.env_prefix.is_empty() {
        return Err(Error::configuration("settings.env_prefix must not be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_any_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::new()
            .with_config_path(dir.path().join("absent.json"))
            .load()
            .unwrap();

        assert!(config.mode.is_managed());
        assert_eq!(config.cache.local_capacity, 10_000);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armature.json");
        std::fs::write(
            &path,
            r#"{"mode": "lightweight-hosted", "cache": {"local_capacity": 64}}"#,
        )
        .unwrap();

        let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
        assert!(config.mode.is_lightweight());
        assert_eq!(config.cache.local_capacity, 64);
        // Untouched sections keep their defaults.
        assert_eq!(config.cache.local_ttl_secs, 300);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armature.json");
        std::fs::write(&path, r#"{"logging": {"level": "verbose"}}"#).unwrap();

        let err = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armature.json");
        std::fs::write(&path, r#"{"cache": {"local_capacity": 0}}"#).unwrap();

        assert!(ConfigLoader::new().with_config_path(&path).load().is_err());
    }
}
