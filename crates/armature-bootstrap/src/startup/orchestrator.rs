//! Initialization orchestrator
//!
//! Runs the fixed, ordered startup sequence that wires every cross-cutting
//! capability into the shared service registry:
//!
//! 1. `ensure_resolver`
//! 2. `discover_components`
//! 3. `ensure_caching`
//! 4. `ensure_configuration`
//! 5. `ensure_logging`
//! 6. `ensure_local_texts`
//! 7. `register_dynamic_scripts`
//! 8. `ensure_request_context`
//! 9. `ensure_request_behaviors`
//!
//! The order is load-bearing: step 1 must precede everything (every other
//! step resolves through the registry), and steps 3-9 lean on the component
//! set and resolver from steps 1-2. Each step is public and safe to call
//! independently or repeatedly: every one is a resolve-or-register guard,
//! so re-running is a no-op and wiring a host performed before
//! orchestration always wins.

use std::sync::Arc;

use tracing::{debug, info};

use armature_application::components::MarkerKind;
use armature_domain::error::{Error, Result};
use armature_domain::ports::{
    BehaviorRegistry, ConfigRepository, DistributedCache, DynamicScriptRegistry, LocalCache,
    LocalTextRegistry, Logger, RequestContext,
};
use armature_domain::registry::ServiceRegistry;

use crate::config::BootConfig;
use crate::constants::APPLICATION_CONFIG_NAME;

use super::components::{self, ComponentSet};
use super::markers;
use super::scripts;
use super::selector::ComponentSelector;
use super::texts;
use super::watcher::{self, ScriptWatcher};

/// The initialization orchestrator
///
/// Holds the registry and boot configuration explicitly; nothing here is
/// global. Hosts construct one, optionally pre-register their own
/// capability implementations on the registry, then call [`Startup::run`]
/// once before serving traffic.
pub struct Startup {
    registry: Arc<ServiceRegistry>,
    config: Arc<BootConfig>,
    selector: ComponentSelector,
}

impl Startup {
    /// Create an orchestrator over `registry` and `config`
    pub fn new(registry: Arc<ServiceRegistry>, config: Arc<BootConfig>) -> Self {
        let selector = ComponentSelector::new(Arc::clone(&config));
        Self {
            registry,
            config,
            selector,
        }
    }

    /// The registry this orchestrator wires
    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    /// Run the full initialization sequence
    ///
    /// Executes the nine steps in their fixed order, then runs every
    /// component `Startup` marker so one-time component initialization has
    /// happened before request handling begins. Fails only by propagating a
    /// step error; a failed startup must not proceed to serve traffic.
    pub fn run(&self) -> Result<()> {
        info!(mode = %self.config.mode, "Initializing Armature composition root");

        self.ensure_resolver()?;
        self.discover_components()?;
        self.ensure_caching()?;
        self.ensure_configuration()?;
        self.ensure_logging()?;
        self.ensure_local_texts()?;
        self.register_dynamic_scripts()?;
        self.ensure_request_context()?;
        self.ensure_request_behaviors()?;
        self.run_startup_markers()?;

        info!(
            services = self.registry.len(),
            "Composition root initialized"
        );
        Ok(())
    }

    /// Step 1: make the registry resolvable through itself
    ///
    /// Every later step resolves its registrar through this capability, so
    /// running any of them first fails with a configuration error.
    pub fn ensure_resolver(&self) -> Result<()> {
        if self.registry.register::<ServiceRegistry>(Arc::clone(&self.registry)) {
            debug!("service resolver registered");
        }
        Ok(())
    }

    /// Step 2: discover and cache the ordered component set
    pub fn discover_components(&self) -> Result<Arc<ComponentSet>> {
        let resolver = self.require_resolver()?;
        resolver.resolve_or_register::<ComponentSet>(|| Ok(Arc::new(components::discover())))
    }

    /// Step 3: ensure local and distributed caches
    pub fn ensure_caching(&self) -> Result<()> {
        let resolver = self.require_resolver()?;

        let local =
            resolver.resolve_or_register::<dyn LocalCache>(|| self.selector.local_cache())?;
        let distributed = resolver
            .resolve_or_register::<dyn DistributedCache>(|| self.selector.distributed_cache())?;

        debug!(
            local = local.provider_name(),
            distributed = distributed.provider_name(),
            "caching ensured"
        );
        Ok(())
    }

    /// Step 4: ensure the application configuration repository
    ///
    /// Registered under the name `"Application"`; a host that pre-registered
    /// its own repository under that name keeps it.
    pub fn ensure_configuration(&self) -> Result<()> {
        let resolver = self.require_resolver()?;

        let repository = resolver.resolve_or_register_named::<dyn ConfigRepository>(
            APPLICATION_CONFIG_NAME,
            || self.selector.configuration_repository(),
        )?;

        debug!(
            provider = repository.provider_name(),
            "configuration repository ensured"
        );
        Ok(())
    }

    /// Step 5: ensure the application log sink
    pub fn ensure_logging(&self) -> Result<()> {
        let resolver = self.require_resolver()?;
        let logger = resolver.resolve_or_register::<dyn Logger>(|| self.selector.logger())?;
        debug!(provider = logger.provider_name(), "logging ensured");
        Ok(())
    }

    /// Step 6: ensure the text registry and apply every text layer
    ///
    /// Layer order (later wins): framework built-ins, nested manifest
    /// texts, enum texts, entity texts, then the JSON overlay folders with
    /// application data last. Re-running replays the same layers onto the
    /// same keys, so registry state is unchanged.
    pub fn ensure_local_texts(&self) -> Result<()> {
        let resolver = self.require_resolver()?;
        let components = self.discover_components()?;

        let registry =
            resolver.resolve_or_register::<dyn LocalTextRegistry>(|| self.selector.text_registry())?;

        registry.set_all(&texts::builtin_texts());
        texts::register_component_texts(registry.as_ref(), &components);

        let mut overlays = 0;
        for folder in self.config.folders.text_overlay_folders() {
            overlays += texts::add_texts_from_folder(registry.as_ref(), folder);
        }

        debug!(
            entries = registry.entry_count(),
            overlays, "local texts ensured"
        );
        Ok(())
    }

    /// Step 7: ensure the script registry and register dynamic scripts
    ///
    /// Manifest-declared scripts first (component order), then
    /// script-registrar markers, then templates from the template folders.
    /// When watching is enabled, file observers start here and re-register
    /// changed payloads on their own threads from then on.
    pub fn register_dynamic_scripts(&self) -> Result<()> {
        let resolver = self.require_resolver()?;
        let components = self.discover_components()?;

        let registry = resolver
            .resolve_or_register::<dyn DynamicScriptRegistry>(|| self.selector.script_registry())?;

        let declared = scripts::register_component_scripts(registry.as_ref(), &components);
        markers::run_markers(&resolver, &components, MarkerKind::ScriptRegistrar)?;
        let templates =
            scripts::register_template_scripts(registry.as_ref(), &self.config.folders.template_folders);

        if self.config.folders.watch_for_changes {
            let watch_registry = Arc::clone(&registry);
            let watch_folders = self.config.folders.watch_folders();
            resolver.resolve_or_register::<ScriptWatcher>(|| {
                Ok(Arc::new(watcher::watch_for_changes(
                    watch_registry,
                    watch_folders,
                )?))
            })?;
        }

        debug!(declared, templates, "dynamic scripts registered");
        Ok(())
    }

    /// Step 8: ensure the ambient request context
    pub fn ensure_request_context(&self) -> Result<()> {
        let resolver = self.require_resolver()?;
        resolver.resolve_or_register::<dyn RequestContext>(|| self.selector.request_context())?;
        Ok(())
    }

    /// Step 9: ensure the behavior registry and add declared behaviors
    ///
    /// Behavior addition is first-declaration-wins per key, so replaying
    /// manifests on a re-run changes nothing.
    pub fn ensure_request_behaviors(&self) -> Result<()> {
        let resolver = self.require_resolver()?;
        let components = self.discover_components()?;

        let registry = resolver
            .resolve_or_register::<dyn BehaviorRegistry>(|| self.selector.behavior_registry())?;

        for manifest in components.iter() {
            if let Some(behaviors) = manifest.behaviors {
                for behavior in behaviors() {
                    registry.add(behavior);
                }
            }
        }
        Ok(())
    }

    /// Run every component `Startup` marker, at most once per target
    ///
    /// Called at the end of [`Startup::run`]; exposed so hosts embedding a
    /// subset of the sequence can still trigger one-time component
    /// initialization before they serve requests.
    pub fn run_startup_markers(&self) -> Result<usize> {
        let resolver = self.require_resolver()?;
        let components = self.discover_components()?;
        markers::run_markers(&resolver, &components, MarkerKind::Startup)
    }

    /// Precondition shared by steps 2-9
    fn require_resolver(&self) -> Result<Arc<ServiceRegistry>> {
        self.registry.try_resolve::<ServiceRegistry>().ok_or_else(|| {
            Error::configuration(
                "service resolver is not registered; run ensure_resolver before other steps",
            )
        })
    }
}

impl std::fmt::Debug for Startup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Startup")
            .field("mode", &self.config.mode)
            .field("registered", &self.registry.len())
            .finish()
    }
}
