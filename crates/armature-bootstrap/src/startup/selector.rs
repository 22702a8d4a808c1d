//! Component selector
//!
//! Pure decision logic mapping `(capability, runtime mode)` to the provider
//! name of the default implementation, plus construction of that default
//! through the provider registries. Selection itself performs no I/O;
//! construction does whatever the chosen provider's factory does.
//!
//! A name with no registered factory (provider crate not linked, feature
//! disabled, typo) is a fatal configuration error: the selector fails
//! loudly rather than substituting an arbitrary implementation.

use std::sync::Arc;

use armature_application::ports::registry::{
    resolve_config_provider, resolve_distributed_cache_provider, resolve_local_cache_provider,
    resolve_logger_provider, resolve_service_provider, CacheProviderConfig, ConfigProviderConfig,
    LoggerProviderConfig, ServiceProviderConfig, BEHAVIOR_REGISTRY_PROVIDERS,
    REQUEST_CONTEXT_PROVIDERS, SCRIPT_REGISTRY_PROVIDERS, TEXT_REGISTRY_PROVIDERS,
};
use armature_domain::error::{Error, Result};
use armature_domain::ports::{
    BehaviorRegistry, ConfigRepository, DistributedCache, DynamicScriptRegistry, LocalCache,
    LocalTextRegistry, Logger, RequestContext,
};

use crate::config::{BootConfig, RuntimeMode};

/// Capabilities the orchestrator wires defaults for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Process-local cache
    LocalCache,
    /// Distributed cache
    DistributedCache,
    /// Application log sink
    Logger,
    /// Application configuration repository
    Configuration,
    /// Localized text registry
    LocalTexts,
    /// Dynamic script registry
    DynamicScripts,
    /// Ambient request context
    RequestContext,
    /// Implicit behavior registry
    RequestBehaviors,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LocalCache => "local cache",
            Self::DistributedCache => "distributed cache",
            Self::Logger => "logger",
            Self::Configuration => "configuration repository",
            Self::LocalTexts => "local text registry",
            Self::DynamicScripts => "dynamic script registry",
            Self::RequestContext => "request context",
            Self::RequestBehaviors => "behavior registry",
        };
        f.write_str(name)
    }
}

/// Default provider name for `capability` under `mode`
///
/// The policy table. Pure: same inputs, same answer, no I/O.
pub fn default_provider(capability: Capability, mode: RuntimeMode) -> &'static str {
    match (capability, mode) {
        // Managed hosts keep processes alive long enough for real eviction
        // to matter; lightweight hosts get the framework-native map.
        (Capability::LocalCache, RuntimeMode::ManagedHosted) => "moka",
        (Capability::LocalCache, RuntimeMode::LightweightHosted) => "memory",
        (Capability::DistributedCache, _) => "emulator",
        (Capability::Logger, _) => "file",
        (Capability::Configuration, _) => "json-settings",
        (Capability::LocalTexts, _) => "default",
        (Capability::DynamicScripts, _) => "default",
        (Capability::RequestContext, _) => "default",
        (Capability::RequestBehaviors, _) => "default",
    }
}

/// Constructs environment-appropriate capability defaults
#[derive(Clone)]
pub struct ComponentSelector {
    config: Arc<BootConfig>,
}

impl ComponentSelector {
    /// Create a selector over the process boot configuration
    pub fn new(config: Arc<BootConfig>) -> Self {
        Self { config }
    }

    fn provider_for(&self, capability: Capability) -> &'static str {
        default_provider(capability, self.config.mode)
    }

    fn wiring_error(capability: Capability, detail: String) -> Error {
        Error::configuration(format!("no default for {capability}: {detail}"))
    }

    /// Default local cache for the current runtime mode
    pub fn local_cache(&self) -> Result<Arc<dyn LocalCache>> {
        let config = CacheProviderConfig::new(self.provider_for(Capability::LocalCache))
            .with_capacity(self.config.cache.local_capacity)
            .with_ttl_secs(self.config.cache.local_ttl_secs);
        resolve_local_cache_provider(&config)
            .map_err(|e| Self::wiring_error(Capability::LocalCache, e))
    }

    /// Default distributed cache for the current runtime mode
    pub fn distributed_cache(&self) -> Result<Arc<dyn DistributedCache>> {
        let config = CacheProviderConfig::new(self.provider_for(Capability::DistributedCache));
        resolve_distributed_cache_provider(&config)
            .map_err(|e| Self::wiring_error(Capability::DistributedCache, e))
    }

    /// Default logger for the current runtime mode
    pub fn logger(&self) -> Result<Arc<dyn Logger>> {
        let config = LoggerProviderConfig::new(self.provider_for(Capability::Logger))
            .with_path(self.config.logger.path.clone())
            .with_min_level(self.config.logger.min_level);
        resolve_logger_provider(&config).map_err(|e| Self::wiring_error(Capability::Logger, e))
    }

    /// Default application configuration repository
    pub fn configuration_repository(&self) -> Result<Arc<dyn ConfigRepository>> {
        let config = ConfigProviderConfig::new(self.provider_for(Capability::Configuration))
            .with_path(self.config.settings.path.clone())
            .with_env_prefix(self.config.settings.env_prefix.clone());
        resolve_config_provider(&config)
            .map_err(|e| Self::wiring_error(Capability::Configuration, e))
    }

    /// Default local text registry
    pub fn text_registry(&self) -> Result<Arc<dyn LocalTextRegistry>> {
        let config = ServiceProviderConfig::new(self.provider_for(Capability::LocalTexts));
        resolve_service_provider(&TEXT_REGISTRY_PROVIDERS, &config)
            .map_err(|e| Self::wiring_error(Capability::LocalTexts, e))
    }

    /// Default dynamic script registry
    pub fn script_registry(&self) -> Result<Arc<dyn DynamicScriptRegistry>> {
        let config = ServiceProviderConfig::new(self.provider_for(Capability::DynamicScripts));
        resolve_service_provider(&SCRIPT_REGISTRY_PROVIDERS, &config)
            .map_err(|e| Self::wiring_error(Capability::DynamicScripts, e))
    }

    /// Default request context
    pub fn request_context(&self) -> Result<Arc<dyn RequestContext>> {
        let config = ServiceProviderConfig::new(self.provider_for(Capability::RequestContext));
        resolve_service_provider(&REQUEST_CONTEXT_PROVIDERS, &config)
            .map_err(|e| Self::wiring_error(Capability::RequestContext, e))
    }

    /// Default behavior registry
    pub fn behavior_registry(&self) -> Result<Arc<dyn BehaviorRegistry>> {
        let config = ServiceProviderConfig::new(self.provider_for(Capability::RequestBehaviors));
        resolve_service_provider(&BEHAVIOR_REGISTRY_PROVIDERS, &config)
            .map_err(|e| Self::wiring_error(Capability::RequestBehaviors, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_cache_default_depends_on_mode() {
        assert_eq!(
            default_provider(Capability::LocalCache, RuntimeMode::ManagedHosted),
            "moka"
        );
        assert_eq!(
            default_provider(Capability::LocalCache, RuntimeMode::LightweightHosted),
            "memory"
        );
    }

    #[test]
    fn shared_defaults_ignore_mode() {
        for mode in [RuntimeMode::ManagedHosted, RuntimeMode::LightweightHosted] {
            assert_eq!(default_provider(Capability::DistributedCache, mode), "emulator");
            assert_eq!(default_provider(Capability::Logger, mode), "file");
            assert_eq!(
                default_provider(Capability::Configuration, mode),
                "json-settings"
            );
        }
    }

    #[test]
    fn selector_constructs_mode_appropriate_cache() {
        let config = Arc::new(BootConfig {
            mode: RuntimeMode::LightweightHosted,
            ..BootConfig::default()
        });
        let selector = ComponentSelector::new(config);

        let cache = selector.local_cache().unwrap();
        assert_eq!(cache.provider_name(), "memory");

        let distributed = selector.distributed_cache().unwrap();
        assert_eq!(distributed.provider_name(), "emulator");
    }
}
