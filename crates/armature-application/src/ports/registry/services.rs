//! Framework Service Provider Registries
//!
//! Registries for the capabilities whose providers need no configuration
//! beyond their name: the local text registry, the dynamic script registry,
//! the request context and the behavior registry. They share one entry shape
//! generic over the capability trait, and one resolve path.

use std::collections::HashMap;
use std::sync::Arc;

use armature_domain::ports::request::{BehaviorRegistry, RequestContext};
use armature_domain::ports::scripts::DynamicScriptRegistry;
use armature_domain::ports::texts::LocalTextRegistry;

/// Configuration for service provider creation
#[derive(Debug, Clone, Default)]
pub struct ServiceProviderConfig {
    /// Provider name (e.g. "default", "null")
    pub provider: String,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ServiceProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            extra: HashMap::new(),
        }
    }
}

/// Registry entry for a framework service provider of capability `T`
pub struct ServiceProviderEntry<T: ?Sized + 'static> {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&ServiceProviderConfig) -> Result<Arc<T>, String>,
}

#[linkme::distributed_slice]
pub static TEXT_REGISTRY_PROVIDERS: [ServiceProviderEntry<dyn LocalTextRegistry>] = [..];

#[linkme::distributed_slice]
pub static SCRIPT_REGISTRY_PROVIDERS: [ServiceProviderEntry<dyn DynamicScriptRegistry>] = [..];

#[linkme::distributed_slice]
pub static REQUEST_CONTEXT_PROVIDERS: [ServiceProviderEntry<dyn RequestContext>] = [..];

#[linkme::distributed_slice]
pub static BEHAVIOR_REGISTRY_PROVIDERS: [ServiceProviderEntry<dyn BehaviorRegistry>] = [..];

/// Resolve a service provider by configured name from `entries`
pub fn resolve_service_provider<T: ?Sized>(
    entries: &[ServiceProviderEntry<T>],
    config: &ServiceProviderConfig,
) -> Result<Arc<T>, String> {
    for entry in entries {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = entries.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown service provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List the providers registered in `entries` as (name, description)
pub fn list_service_providers<T: ?Sized>(
    entries: &[ServiceProviderEntry<T>],
) -> Vec<(&'static str, &'static str)> {
    entries.iter().map(|e| (e.name, e.description)).collect()
}
