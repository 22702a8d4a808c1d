//! JSON application-settings repository
//!
//! The `"Application"` configuration default: settings come from a JSON file
//! merged with prefixed environment variables (environment wins). The merged
//! document is read once at construction; the repository itself is
//! read-only.

use std::path::Path;

use figment::providers::{Env, Format, Json};
use figment::Figment;
use serde_json::Value;
use tracing::{info, warn};

use armature_domain::error::{Error, Result};
use armature_domain::ports::config::ConfigRepository;

/// Settings repository backed by a JSON file plus environment overrides
#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    sections: serde_json::Map<String, Value>,
}

impl JsonSettingsRepository {
    /// Load settings from `path` (optional) and `env_prefix` overrides
    ///
    /// A missing file contributes nothing; a present but malformed file is a
    /// fatal configuration error.
    pub fn load(path: Option<&Path>, env_prefix: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Json::file(path));
                info!("Application settings loaded from {}", path.display());
            } else {
                warn!("Application settings file not found: {}", path.display());
            }
        }

        if let Some(prefix) = env_prefix {
            figment = figment.merge(Env::prefixed(&format!("{prefix}_")).split("_"));
        }

        let sections: serde_json::Map<String, Value> = figment.extract().map_err(|e| {
            Error::configuration_with_source("failed to load application settings", e)
        })?;

        Ok(Self { sections })
    }

    /// Build a repository directly from an in-memory settings document
    pub fn from_sections(sections: serde_json::Map<String, Value>) -> Self {
        Self { sections }
    }

    /// Names of the loaded top-level sections
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }
}

impl ConfigRepository for JsonSettingsRepository {
    fn section(&self, section: &str) -> Result<Option<Value>> {
        Ok(self.sections.get(section).cloned())
    }

    fn value(&self, section: &str, key: &str) -> Result<Option<Value>> {
        Ok(self
            .sections
            .get(section)
            .and_then(|value| value.get(key))
            .cloned())
    }

    fn provider_name(&self) -> &str {
        "json-settings"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    ConfigProviderConfig, ConfigProviderEntry, CONFIG_PROVIDERS,
};

#[linkme::distributed_slice(CONFIG_PROVIDERS)]
static JSON_SETTINGS_PROVIDER: ConfigProviderEntry = ConfigProviderEntry {
    name: "json-settings",
    description: "JSON application-settings repository with env overrides",
    factory: |config: &ConfigProviderConfig| {
        let env_prefix = config
            .env_prefix
            .clone()
            .unwrap_or_else(|| crate::constants::SETTINGS_ENV_PREFIX.to_string());
        let repository = JsonSettingsRepository::load(config.path.as_deref(), Some(&env_prefix))
            .map_err(|e| e.to_string())?;
        Ok(std::sync::Arc::new(repository))
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_sections_and_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appsettings.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"Mail": {{"smtp_host": "localhost", "port": 2525}}}}"#
        )
        .unwrap();

        let repo = JsonSettingsRepository::load(Some(&path), None).unwrap();

        let section = repo.section("Mail").unwrap().expect("section exists");
        assert_eq!(section["smtp_host"], "localhost");
        assert_eq!(
            repo.value("Mail", "port").unwrap(),
            Some(Value::Number(2525.into()))
        );
        assert_eq!(repo.value("Mail", "missing").unwrap(), None);
        assert_eq!(repo.section("Ghost").unwrap(), None);
    }

    #[test]
    fn missing_file_yields_empty_repository() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let repo = JsonSettingsRepository::load(Some(&path), None).unwrap();
        assert!(repo.section_names().is_empty());
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonSettingsRepository::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
