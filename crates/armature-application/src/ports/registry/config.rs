//! Configuration Repository Provider Registry

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use armature_domain::ports::config::ConfigRepository;

/// Configuration for config repository provider creation
#[derive(Debug, Clone, Default)]
pub struct ConfigProviderConfig {
    /// Provider name (e.g. "json-settings", "null")
    pub provider: String,
    /// Settings file path, for file-backed providers
    pub path: Option<PathBuf>,
    /// Environment variable prefix for override values
    pub env_prefix: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ConfigProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the settings file path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }
}

/// Registry entry for configuration repository providers
pub struct ConfigProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&ConfigProviderConfig) -> Result<Arc<dyn ConfigRepository>, String>,
}

#[linkme::distributed_slice]
pub static CONFIG_PROVIDERS: [ConfigProviderEntry] = [..];

/// Resolve a configuration repository provider by configured name
pub fn resolve_config_provider(
    config: &ConfigProviderConfig,
) -> Result<Arc<dyn ConfigRepository>, String> {
    for entry in CONFIG_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CONFIG_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown configuration provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered configuration providers as (name, description)
pub fn list_config_providers() -> Vec<(&'static str, &'static str)> {
    CONFIG_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = ConfigProviderConfig::new("json-settings")
            .with_path("config/appsettings.json")
            .with_env_prefix("APP");

        assert_eq!(config.provider, "json-settings");
        assert_eq!(config.path, Some(PathBuf::from("config/appsettings.json")));
        assert_eq!(config.env_prefix, Some("APP".to_string()));
    }
}
