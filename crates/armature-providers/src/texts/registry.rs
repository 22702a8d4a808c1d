//! Default local text registry
//!
//! Concurrent map keyed by (locale, key). `set` replaces unconditionally,
//! which is what gives the orchestrator's layered registration its
//! last-layer-wins contract. Lookups fall back along the locale chain:
//! exact locale, then its language part, then the invariant locale.

use dashmap::DashMap;

use armature_domain::ports::texts::{LocalTextRegistry, INVARIANT_LOCALE};

/// Map-backed text registry with locale-chain fallback
#[derive(Debug, Default)]
pub struct DefaultLocalTextRegistry {
    entries: DashMap<(String, String), String>,
}

impl DefaultLocalTextRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<String> {
        self.entries
            .get(&(locale.to_string(), key.to_string()))
            .map(|entry| entry.value().clone())
    }
}

impl LocalTextRegistry for DefaultLocalTextRegistry {
    fn set(&self, locale: &str, key: &str, text: &str) {
        self.entries
            .insert((locale.to_string(), key.to_string()), text.to_string());
    }

    fn get(&self, locale: &str, key: &str) -> Option<String> {
        if let Some(text) = self.lookup(locale, key) {
            return Some(text);
        }

        // "en-US" falls back to "en" before the invariant locale.
        if let Some(language) = locale.split('-').next() {
            if language != locale {
                if let Some(text) = self.lookup(language, key) {
                    return Some(text);
                }
            }
        }

        if locale != INVARIANT_LOCALE {
            return self.lookup(INVARIANT_LOCALE, key);
        }

        None
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn provider_name(&self) -> &str {
        "default"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use armature_application::ports::registry::{
    ServiceProviderConfig, ServiceProviderEntry, TEXT_REGISTRY_PROVIDERS,
};

#[linkme::distributed_slice(TEXT_REGISTRY_PROVIDERS)]
static DEFAULT_TEXT_REGISTRY_PROVIDER: ServiceProviderEntry<dyn LocalTextRegistry> =
    ServiceProviderEntry {
        name: "default",
        description: "Concurrent map text registry with locale fallback",
        factory: |_config: &ServiceProviderConfig| {
            Ok(std::sync::Arc::new(DefaultLocalTextRegistry::new()))
        },
    };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_last_write_wins() {
        let registry = DefaultLocalTextRegistry::new();
        registry.set(INVARIANT_LOCALE, "dialogs.ok", "OK");
        registry.set(INVARIANT_LOCALE, "dialogs.ok", "Okay");
        assert_eq!(
            registry.get(INVARIANT_LOCALE, "dialogs.ok").as_deref(),
            Some("Okay")
        );
        assert_eq!(registry.entry_count(), 1);
    }

    #[test]
    fn lookup_falls_back_along_locale_chain() {
        let registry = DefaultLocalTextRegistry::new();
        registry.set(INVARIANT_LOCALE, "greeting", "hello");
        registry.set("de", "greeting", "hallo");
        registry.set("de-AT", "greeting", "servus");

        assert_eq!(registry.get("de-AT", "greeting").as_deref(), Some("servus"));
        assert_eq!(registry.get("de-CH", "greeting").as_deref(), Some("hallo"));
        assert_eq!(registry.get("fr", "greeting").as_deref(), Some("hello"));
        assert_eq!(registry.get("fr", "missing"), None);
    }
}
