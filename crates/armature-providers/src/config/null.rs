//! No-op configuration repository

use serde_json::Value;

use armature_domain::error::Result;
use armature_domain::ports::config::ConfigRepository;

/// Configuration repository with no sections
#[derive(Debug, Default)]
pub struct NullConfigRepository;

impl NullConfigRepository {
    /// Create a null repository
    pub fn new() -> Self {
        Self
    }
}

impl ConfigRepository for NullConfigRepository {
    fn section(&self, _section: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    fn value(&self, _section: &str, _key: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    ConfigProviderConfig, ConfigProviderEntry, CONFIG_PROVIDERS,
};

#[linkme::distributed_slice(CONFIG_PROVIDERS)]
static NULL_CONFIG_PROVIDER: ConfigProviderEntry = ConfigProviderEntry {
    name: "null",
    description: "Empty configuration repository",
    factory: |_config: &ConfigProviderConfig| Ok(std::sync::Arc::new(NullConfigRepository::new())),
};
