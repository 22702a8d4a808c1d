//! Default behavior registry

use dashmap::DashMap;

use armature_domain::ports::request::{BehaviorDescriptor, BehaviorRegistry};

/// Map-backed behavior registry
///
/// First declaration wins per key, which keeps repeated orchestration runs
/// from duplicating component-declared behaviors.
#[derive(Debug, Default)]
pub struct DefaultBehaviorRegistry {
    behaviors: DashMap<String, BehaviorDescriptor>,
}

impl DefaultBehaviorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

impl BehaviorRegistry for DefaultBehaviorRegistry {
    fn add(&self, descriptor: BehaviorDescriptor) -> bool {
        match self.behaviors.entry(descriptor.key.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(descriptor);
                true
            }
        }
    }

    fn list(&self) -> Vec<BehaviorDescriptor> {
        let mut behaviors: Vec<BehaviorDescriptor> =
            self.behaviors.iter().map(|e| e.value().clone()).collect();
        behaviors.sort_by(|a, b| a.key.cmp(&b.key));
        behaviors
    }

    fn provider_name(&self) -> &str {
        "default"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    ServiceProviderConfig, ServiceProviderEntry, BEHAVIOR_REGISTRY_PROVIDERS,
};

#[linkme::distributed_slice(BEHAVIOR_REGISTRY_PROVIDERS)]
static DEFAULT_BEHAVIOR_REGISTRY_PROVIDER: ServiceProviderEntry<dyn BehaviorRegistry> =
    ServiceProviderEntry {
        name: "default",
        description: "Map-backed behavior registry",
        factory: |_config: &ServiceProviderConfig| {
            Ok(std::sync::Arc::new(DefaultBehaviorRegistry::new()))
        },
    };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declaration_wins_per_key() {
        let registry = DefaultBehaviorRegistry::new();
        assert!(registry.add(BehaviorDescriptor::new("audit", "save", "core")));
        assert!(!registry.add(BehaviorDescriptor::new("audit", "save", "other")));

        let behaviors = registry.list();
        assert_eq!(behaviors.len(), 1);
        assert_eq!(behaviors[0].component, "core");
    }

    #[test]
    fn list_category_filters() {
        let registry = DefaultBehaviorRegistry::new();
        registry.add(BehaviorDescriptor::new("audit", "save", "core"));
        registry.add(BehaviorDescriptor::new("paging", "list", "core"));

        let save = registry.list_category("save");
        assert_eq!(save.len(), 1);
        assert_eq!(save[0].key, "audit");
    }
}
