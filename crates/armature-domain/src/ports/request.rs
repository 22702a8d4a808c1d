//! Request Context and Behavior Registry Ports

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ambient request-scoped values capability
///
/// Exposes the per-request item bag request-handling code shares state
/// through. How scoping is achieved (task-locals, middleware, one instance
/// per request) is the implementation's business; the startup default is a
/// plain shared bag suitable for the single-request-at-a-time test paths.
pub trait RequestContext: Send + Sync {
    /// Read an ambient item
    fn item(&self, key: &str) -> Option<Value>;

    /// Store an ambient item
    fn set_item(&self, key: &str, value: Value);

    /// Drop all ambient items (end of request)
    fn clear_items(&self);

    /// Identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Describes one implicit request behavior
///
/// Behaviors are cross-cutting request handlers (auditing, validation,
/// permission checks) that components contribute declaratively; handlers
/// look them up by category at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorDescriptor {
    /// Unique behavior key (e.g. "audit-log")
    pub key: String,
    /// Behavior category handlers filter on (e.g. "save", "list")
    pub category: String,
    /// Name of the component that declared the behavior
    pub component: String,
}

impl BehaviorDescriptor {
    /// Create a descriptor
    pub fn new<K, C, S>(key: K, category: C, component: S) -> Self
    where
        K: Into<String>,
        C: Into<String>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            category: category.into(),
            component: component.into(),
        }
    }
}

/// Implicit behavior registry capability
pub trait BehaviorRegistry: Send + Sync {
    /// Add a behavior; returns `false` when the key is already present
    /// (first declaration wins, re-registration is a no-op)
    fn add(&self, descriptor: BehaviorDescriptor) -> bool;

    /// All behaviors, ordered by key
    fn list(&self) -> Vec<BehaviorDescriptor>;

    /// Behaviors in `category`, ordered by key
    fn list_category(&self, category: &str) -> Vec<BehaviorDescriptor> {
        self.list()
            .into_iter()
            .filter(|behavior| behavior.category == category)
            .collect()
    }

    /// Identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
