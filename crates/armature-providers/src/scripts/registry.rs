//! Default dynamic script registry

use dashmap::DashMap;

use armature_domain::ports::scripts::{DynamicScript, DynamicScriptRegistry};

/// Map-backed script registry
///
/// Registration replaces by name, so file overlays and watchers can refresh
/// a payload in place.
#[derive(Debug, Default)]
pub struct DefaultDynamicScriptRegistry {
    scripts: DashMap<String, DynamicScript>,
}

impl DefaultDynamicScriptRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

impl DynamicScriptRegistry for DefaultDynamicScriptRegistry {
    fn set(&self, script: DynamicScript) {
        self.scripts.insert(script.name.clone(), script);
    }

    fn get(&self, name: &str) -> Option<DynamicScript> {
        self.scripts.get(name).map(|entry| entry.value().clone())
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scripts.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    fn provider_name(&self) -> &str {
        "default"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    ServiceProviderConfig, ServiceProviderEntry, SCRIPT_REGISTRY_PROVIDERS,
};

#[linkme::distributed_slice(SCRIPT_REGISTRY_PROVIDERS)]
static DEFAULT_SCRIPT_REGISTRY_PROVIDER: ServiceProviderEntry<dyn DynamicScriptRegistry> =
    ServiceProviderEntry {
        name: "default",
        description: "Concurrent map script registry",
        factory: |_config: &ServiceProviderConfig| {
            Ok(std::sync::Arc::new(DefaultDynamicScriptRegistry::new()))
        },
    };

#[cfg(test)]
mod tests {
    use super::*;
    use armature_domain::ports::scripts::ScriptKind;

    #[test]
    fn set_replaces_payload_by_name() {
        let registry = DefaultDynamicScriptRegistry::new();
        registry.set(DynamicScript::new(
            "Lookup.City",
            ScriptKind::Lookup,
            "v1",
        ));
        registry.set(DynamicScript::new(
            "Lookup.City",
            ScriptKind::Lookup,
            "v2",
        ));

        let script = registry.get("Lookup.City").expect("registered");
        assert_eq!(script.content, "v2");
        assert_eq!(registry.names(), vec!["Lookup.City".to_string()]);
    }

    #[test]
    fn names_are_sorted() {
        let registry = DefaultDynamicScriptRegistry::new();
        registry.set(DynamicScript::new("b", ScriptKind::Plain, ""));
        registry.set(DynamicScript::new("a", ScriptKind::Plain, ""));
        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
    }
}
