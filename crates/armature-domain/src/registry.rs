//! Shared service registry
//!
//! Maps capability interfaces to single live instances for the lifetime of
//! the process. Consumers resolve by capability (`dyn Trait` or concrete
//! type), never by construction site, which is what lets the orchestrator
//! swap defaults per runtime mode and lets hosts pre-register their own
//! implementations.
//!
//! ## Contract
//!
//! - At most one live instance per `(capability, optional name)` key.
//! - First registration wins. Registration is an atomic check-then-set; a
//!   later attempt for an occupied key is a no-op. There is no unregister.
//! - Named registration is the escape hatch for multi-instance capabilities
//!   (e.g. configuration repositories keyed by purpose).
//!
//! All writes are expected to happen during startup, before request traffic
//! starts, but the operations are atomic so the contract holds even if a
//! host parallelizes initialization steps.

use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{Error, Result};

/// Registry key: capability interface identity plus optional instance name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ServiceKey {
    type_id: TypeId,
    name: Option<String>,
}

impl ServiceKey {
    fn of<S: ?Sized + 'static>(name: Option<&str>) -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            name: name.map(str::to_owned),
        }
    }
}

/// Process-wide capability-to-instance registry
///
/// Stores `Arc<S>` handles behind type erasure, where `S` is usually a
/// `dyn Trait` capability but may be any `'static` type (the component set
/// and the marker ledger are registered as plain structs).
///
/// The registry is constructed once by the host and passed around
/// explicitly; it is not a hidden global.
#[derive(Default)]
pub struct ServiceRegistry {
    entries: DashMap<ServiceKey, Arc<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the capability `S`, if registered
    pub fn try_resolve<S>(&self) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.lookup(ServiceKey::of::<S>(None))
    }

    /// Resolve the capability `S` registered under `name`, if registered
    pub fn try_resolve_named<S>(&self, name: &str) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.lookup(ServiceKey::of::<S>(Some(name)))
    }

    /// Resolve the capability `S`, failing with a configuration error when
    /// it has not been registered
    pub fn resolve<S>(&self) -> Result<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.try_resolve::<S>().ok_or_else(|| {
            Error::configuration(format!(
                "capability {} is not registered",
                std::any::type_name::<S>()
            ))
        })
    }

    /// Resolve the capability `S` registered under `name`, failing with a
    /// configuration error when absent
    pub fn resolve_named<S>(&self, name: &str) -> Result<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.try_resolve_named::<S>(name).ok_or_else(|| {
            Error::configuration(format!(
                "capability {} (name {name:?}) is not registered",
                std::any::type_name::<S>()
            ))
        })
    }

    /// Register `instance` for capability `S`
    ///
    /// Returns `true` if the instance was stored, `false` if the capability
    /// was already registered (the existing instance stands).
    pub fn register<S>(&self, instance: Arc<S>) -> bool
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.insert_first(ServiceKey::of::<S>(None), instance)
    }

    /// Register `instance` for capability `S` under `name`
    pub fn register_named<S>(&self, name: &str, instance: Arc<S>) -> bool
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.insert_first(ServiceKey::of::<S>(Some(name)), instance)
    }

    /// Resolve capability `S`, constructing and registering a default when
    /// absent
    ///
    /// This is the idempotent guard every ensure-X step is built on: an
    /// already-registered instance is returned untouched and `default` is
    /// never invoked. The factory runs outside the map locks so it may
    /// itself resolve other capabilities.
    pub fn resolve_or_register<S>(
        &self,
        default: impl FnOnce() -> Result<Arc<S>>,
    ) -> Result<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        if let Some(existing) = self.try_resolve::<S>() {
            return Ok(existing);
        }
        let instance = default()?;
        self.register::<S>(Arc::clone(&instance));
        // A concurrent writer may have won the check-then-set; the stored
        // instance is authoritative either way.
        self.resolve::<S>()
    }

    /// Resolve capability `S` under `name`, constructing and registering a
    /// default when absent
    pub fn resolve_or_register_named<S>(
        &self,
        name: &str,
        default: impl FnOnce() -> Result<Arc<S>>,
    ) -> Result<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        if let Some(existing) = self.try_resolve_named::<S>(name) {
            return Ok(existing);
        }
        let instance = default()?;
        self.register_named::<S>(name, Arc::clone(&instance));
        self.resolve_named::<S>(name)
    }

    /// Whether capability `S` is registered (unnamed entry)
    pub fn is_registered<S>(&self) -> bool
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.entries.contains_key(&ServiceKey::of::<S>(None))
    }

    /// Number of registered entries (named entries count separately)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup<S>(&self, key: ServiceKey) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.entries
            .get(&key)
            .and_then(|entry| entry.value().downcast_ref::<Arc<S>>().cloned())
    }

    fn insert_first<S>(&self, key: ServiceKey, instance: Arc<S>) -> bool
    where
        S: ?Sized + Send + Sync + 'static,
    {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(instance));
                true
            }
        }
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> &'static str;
    }

    struct English;
    impl Greeter for English {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    struct French;
    impl Greeter for French {
        fn greet(&self) -> &'static str {
            "bonjour"
        }
    }

    #[test]
    fn resolves_registered_trait_object() {
        let registry = ServiceRegistry::new();
        assert!(registry.try_resolve::<dyn Greeter>().is_none());

        registry.register::<dyn Greeter>(Arc::new(English));
        let greeter = registry.try_resolve::<dyn Greeter>().expect("registered");
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn first_registration_wins() {
        let registry = ServiceRegistry::new();
        assert!(registry.register::<dyn Greeter>(Arc::new(English)));
        assert!(!registry.register::<dyn Greeter>(Arc::new(French)));

        let greeter = registry.resolve::<dyn Greeter>().unwrap();
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn named_entries_are_independent() {
        let registry = ServiceRegistry::new();
        registry.register_named::<dyn Greeter>("fr", Arc::new(French));

        assert!(registry.try_resolve::<dyn Greeter>().is_none());
        let greeter = registry
            .try_resolve_named::<dyn Greeter>("fr")
            .expect("named entry");
        assert_eq!(greeter.greet(), "bonjour");
    }

    #[test]
    fn resolve_or_register_is_idempotent() {
        let registry = ServiceRegistry::new();

        let first = registry
            .resolve_or_register::<dyn Greeter>(|| Ok(Arc::new(English)))
            .unwrap();
        assert_eq!(first.greet(), "hello");
        let entries_after_first = registry.len();

        // Second call must not replace the instance or invoke the factory.
        let second = registry
            .resolve_or_register::<dyn Greeter>(|| panic!("factory must not run"))
            .unwrap();
        assert_eq!(second.greet(), "hello");
        assert_eq!(registry.len(), entries_after_first);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn resolve_or_register_propagates_factory_failure() {
        let registry = ServiceRegistry::new();
        let result = registry
            .resolve_or_register::<dyn Greeter>(|| Err(Error::configuration("no default")));
        assert!(result.is_err());
        assert!(registry.try_resolve::<dyn Greeter>().is_none());
    }

    #[test]
    fn resolve_reports_missing_capability() {
        let registry = ServiceRegistry::new();
        let err = match registry.resolve::<dyn Greeter>() {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("Greeter"));
    }

    #[test]
    fn concrete_types_can_be_registered_too() {
        let registry = ServiceRegistry::new();
        registry.register::<u64>(Arc::new(42u64));
        assert_eq!(*registry.resolve::<u64>().unwrap(), 42);
    }
}
