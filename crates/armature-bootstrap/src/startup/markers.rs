//! Startup marker runner
//!
//! Components declare one-time initialization hooks as manifest markers.
//! The runner executes them in component-set order, declaration order within
//! a manifest, and guarantees each marker *target* runs at most once per
//! process no matter how many markers reference it.
//!
//! The run-once ledger lives in the service registry, so its lifetime is
//! the process (the registry's), not any single orchestrator instance.

use std::sync::Arc;

use dashmap::DashSet;
use tracing::debug;

use armature_application::components::MarkerKind;
use armature_domain::error::Result;
use armature_domain::registry::ServiceRegistry;

use super::components::ComponentSet;

/// Tracks which marker targets already ran
#[derive(Debug, Default)]
pub struct MarkerLedger {
    executed: DashSet<&'static str>,
}

impl MarkerLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `target` for execution; `false` means it already ran
    pub fn try_claim(&self, target: &'static str) -> bool {
        self.executed.insert(target)
    }

    /// Whether `target` has run
    pub fn has_run(&self, target: &str) -> bool {
        self.executed.contains(target)
    }

    /// Number of executed targets
    pub fn len(&self) -> usize {
        self.executed.len()
    }

    /// Whether nothing has run yet
    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }
}

/// Run every `kind` marker declared by `components`, at most once per target
///
/// Returns the number of targets executed by this call. A failing marker
/// aborts startup: its component's one-time initialization did not complete.
pub fn run_markers(
    registry: &ServiceRegistry,
    components: &ComponentSet,
    kind: MarkerKind,
) -> Result<usize> {
    let ledger =
        registry.resolve_or_register::<MarkerLedger>(|| Ok(Arc::new(MarkerLedger::new())))?;

    let mut executed = 0;
    for manifest in components.iter() {
        for marker in manifest.markers {
            if marker.kind != kind {
                continue;
            }
            if !ledger.try_claim(marker.target) {
                debug!(
                    component = manifest.name,
                    target = marker.target,
                    "marker target already initialized; skipping"
                );
                continue;
            }
            debug!(
                component = manifest.name,
                target = marker.target,
                "running startup marker"
            );
            (marker.run)(registry)?;
            executed += 1;
        }
    }

    Ok(executed)
}
