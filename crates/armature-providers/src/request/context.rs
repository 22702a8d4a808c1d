//! Default request context

use dashmap::DashMap;
use serde_json::Value;

use armature_domain::ports::request::RequestContext;

/// Shared item bag satisfying the request context capability
///
/// Hosting layers that serve concurrent requests typically wrap one of
/// these per request scope; the registered instance is the process-wide
/// default used before any request pipeline exists.
#[derive(Debug, Default)]
pub struct DefaultRequestContext {
    items: DashMap<String, Value>,
}

impl DefaultRequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestContext for DefaultRequestContext {
    fn item(&self, key: &str) -> Option<Value> {
        self.items.get(key).map(|entry| entry.value().clone())
    }

    fn set_item(&self, key: &str, value: Value) {
        self.items.insert(key.to_string(), value);
    }

    fn clear_items(&self) {
        self.items.clear();
    }

    fn provider_name(&self) -> &str {
        "default"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    ServiceProviderConfig, ServiceProviderEntry, REQUEST_CONTEXT_PROVIDERS,
};

#[linkme::distributed_slice(REQUEST_CONTEXT_PROVIDERS)]
static DEFAULT_REQUEST_CONTEXT_PROVIDER: ServiceProviderEntry<dyn RequestContext> =
    ServiceProviderEntry {
        name: "default",
        description: "Shared item bag request context",
        factory: |_config: &ServiceProviderConfig| {
            Ok(std::sync::Arc::new(DefaultRequestContext::new()))
        },
    };

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_roundtrip_and_clear() {
        let context = DefaultRequestContext::new();
        context.set_item("user_id", json!(42));
        assert_eq!(context.item("user_id"), Some(json!(42)));

        context.clear_items();
        assert_eq!(context.item("user_id"), None);
    }
}
