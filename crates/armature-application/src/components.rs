//! Component Manifest Registry
//!
//! Components (framework crates, feature modules, host application modules)
//! describe themselves to the composition root through an explicit manifest
//! submitted at compile time, instead of being discovered by scanning
//! binary metadata. The orchestrator collects the manifests, keeps the ones
//! in the framework's component family, and orders them by their declared
//! references.
//!
//! ## Declaring a component
//!
//! ```ignore
//! use armature_application::components::{ComponentManifest, COMPONENTS};
//!
//! #[linkme::distributed_slice(COMPONENTS)]
//! static NORTHWIND: ComponentManifest = ComponentManifest {
//!     references: &["armature-web"],
//!     scripts: Some(northwind_scripts),
//!     ..ComponentManifest::new("northwind")
//! };
//! ```
//!
//! Everything in a manifest is declarative: fields hold data or plain `fn`
//! pointers so manifests can live in statics.

use armature_domain::error::Result;
use armature_domain::ports::request::BehaviorDescriptor;
use armature_domain::ports::scripts::DynamicScript;
use armature_domain::ports::texts::LocalText;
use armature_domain::registry::ServiceRegistry;

/// Which orchestration step consumes a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Generic one-time component initialization
    Startup,
    /// Dynamic script registration hook
    ScriptRegistrar,
}

/// A declared one-time initialization hook
///
/// `target` identifies the initialized artifact: the orchestrator runs each
/// target at most once per process no matter how many markers (in however
/// many components) reference it. Use the full path of the initialized type
/// or module as the target.
#[derive(Clone, Copy)]
pub struct StartupMarker {
    /// Which step runs this marker
    pub kind: MarkerKind,
    /// Identity of the initialized artifact, for run-once bookkeeping
    pub target: &'static str,
    /// The initialization hook itself
    pub run: fn(&ServiceRegistry) -> Result<()>,
}

impl std::fmt::Debug for StartupMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartupMarker")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .finish()
    }
}

/// Self-description of one component
///
/// All declaration fields are optional; a minimal manifest is just a name.
#[derive(Debug, Clone, Copy)]
pub struct ComponentManifest {
    /// Unique component name; family membership is derived from it
    pub name: &'static str,
    /// Names of components this one depends on (orders the component set)
    pub references: &'static [&'static str],
    /// One-time initialization hooks
    pub markers: &'static [StartupMarker],
    /// Texts declared alongside types nested in this component
    pub nested_texts: Option<fn() -> Vec<LocalText>>,
    /// Texts derived from this component's enums
    pub enum_texts: Option<fn() -> Vec<LocalText>>,
    /// Texts derived from this component's entities
    pub entity_texts: Option<fn() -> Vec<LocalText>>,
    /// Dynamic script payloads this component contributes
    pub scripts: Option<fn() -> Vec<DynamicScript>>,
    /// Implicit request behaviors this component contributes
    pub behaviors: Option<fn() -> Vec<BehaviorDescriptor>>,
}

impl ComponentManifest {
    /// An empty manifest for `name`, for use with struct update syntax
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            references: &[],
            markers: &[],
            nested_texts: None,
            enum_texts: None,
            entity_texts: None,
            scripts: None,
            behaviors: None,
        }
    }
}

// Components submit manifests at compile time via linkme
#[linkme::distributed_slice]
pub static COMPONENTS: [ComponentManifest] = [..];

/// Find a manifest by component name
pub fn find_component(name: &str) -> Option<&'static ComponentManifest> {
    COMPONENTS.iter().find(|manifest| manifest.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_texts() -> Vec<LocalText> {
        vec![LocalText::invariant("sample.greeting", "hello")]
    }

    #[linkme::distributed_slice(COMPONENTS)]
    static TEST_MANIFEST: ComponentManifest = ComponentManifest {
        references: &["armature-core"],
        nested_texts: Some(sample_texts),
        ..ComponentManifest::new("armature-components-selftest")
    };

    #[test]
    fn declared_manifest_is_discoverable() {
        let manifest = find_component("armature-components-selftest").expect("linked manifest");
        assert_eq!(manifest.references, &["armature-core"]);

        let texts = (manifest.nested_texts.expect("declared"))();
        assert_eq!(texts[0].key, "sample.greeting");
    }

    #[test]
    fn minimal_manifest_is_empty() {
        let manifest = ComponentManifest::new("bare");
        assert!(manifest.references.is_empty());
        assert!(manifest.markers.is_empty());
        assert!(manifest.scripts.is_none());
    }
}
