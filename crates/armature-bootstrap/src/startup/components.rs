//! Component set discovery and ordering
//!
//! Collects the manifests components declared through the
//! `armature_application::components::COMPONENTS` slice, keeps the ones in
//! the framework's component family, and produces a deterministic,
//! dependency-respecting order.
//!
//! Discovery must always terminate during process start, so nothing here
//! returns an error: duplicates are excluded with a warning, unresolved
//! references are ignored, and reference cycles are broken at the
//! lexicographically smallest remaining component. Ties between unordered
//! components are likewise broken by name, which makes the order identical
//! across repeated runs.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use armature_application::components::{ComponentManifest, COMPONENTS};

use crate::constants::FRAMEWORK_FAMILY;

/// Ordered set of components relevant to this application
///
/// Produced once per process and cached in the service registry; later
/// steps iterate it to find declared texts, scripts, markers and behaviors.
#[derive(Debug, Clone)]
pub struct ComponentSet {
    ordered: Vec<&'static ComponentManifest>,
}

impl ComponentSet {
    /// Components in dependency-respecting order
    pub fn iter(&self) -> impl Iterator<Item = &'static ComponentManifest> + '_ {
        self.ordered.iter().copied()
    }

    /// Component names in set order
    pub fn names(&self) -> Vec<&'static str> {
        self.ordered.iter().map(|manifest| manifest.name).collect()
    }

    /// Whether `name` is part of the set
    pub fn contains(&self, name: &str) -> bool {
        self.ordered.iter().any(|manifest| manifest.name == name)
    }

    /// Number of components in the set
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Discover the application's component set from the manifest slice
pub fn discover() -> ComponentSet {
    let set = build_set(COMPONENTS.iter().collect());
    info!(
        components = set.len(),
        "Discovered component set: {:?}",
        set.names()
    );
    set
}

/// Whether a manifest belongs to the framework's component family
///
/// A component is "self" when its own name carries the family token or when
/// any of its declared references does: host modules built on the
/// framework count, unrelated bystanders do not.
fn is_self_component(manifest: &ComponentManifest) -> bool {
    manifest.name.contains(FRAMEWORK_FAMILY)
        || manifest
            .references
            .iter()
            .any(|reference| reference.contains(FRAMEWORK_FAMILY))
}

/// Build an ordered set from candidate manifests
pub(crate) fn build_set(candidates: Vec<&'static ComponentManifest>) -> ComponentSet {
    // Name-sorted intake keeps everything downstream deterministic
    // regardless of link order.
    let mut sorted: Vec<&'static ComponentManifest> = candidates
        .into_iter()
        .filter(|manifest| is_self_component(manifest))
        .collect();
    sorted.sort_by_key(|manifest| manifest.name);

    let mut by_name: BTreeMap<&'static str, &'static ComponentManifest> = BTreeMap::new();
    for manifest in sorted {
        if by_name.contains_key(manifest.name) {
            warn!(
                component = manifest.name,
                "duplicate component manifest excluded from the component set"
            );
            continue;
        }
        by_name.insert(manifest.name, manifest);
    }

    ComponentSet {
        ordered: topological_order(&by_name),
    }
}

/// Kahn's algorithm with lexicographic tie-break and cycle breaking
fn topological_order(
    by_name: &BTreeMap<&'static str, &'static ComponentManifest>,
) -> Vec<&'static ComponentManifest> {
    let mut indegree: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut dependents: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();

    for (&name, manifest) in by_name {
        let mut degree = 0;
        for &reference in manifest.references {
            if reference == name {
                continue;
            }
            if by_name.contains_key(reference) {
                degree += 1;
                dependents.entry(reference).or_default().push(name);
            } else {
                debug!(
                    component = name,
                    reference, "unresolved component reference ignored for ordering"
                );
            }
        }
        indegree.insert(name, degree);
    }

    let mut ready: BTreeSet<&'static str> = indegree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(name, _)| *name)
        .collect();
    let mut remaining: BTreeSet<&'static str> = by_name.keys().copied().collect();
    let mut ordered = Vec::with_capacity(by_name.len());

    while !remaining.is_empty() {
        let next = match ready.iter().next().copied() {
            Some(name) => name,
            None => {
                // Cycle: pick the smallest remaining name so the break is
                // reproducible, and continue as if its edges were satisfied.
                let Some(name) = remaining.iter().next().copied() else {
                    break;
                };
                warn!(
                    component = name,
                    "component reference cycle detected; order broken at lexicographically smallest member"
                );
                name
            }
        };

        ready.remove(next);
        remaining.remove(next);
        if let Some(manifest) = by_name.get(next) {
            ordered.push(*manifest);
        }

        for dependent in dependents.get(next).cloned().unwrap_or_default() {
            if !remaining.contains(dependent) {
                continue;
            }
            if let Some(degree) = indegree.get_mut(dependent) {
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    ready.insert(dependent);
                }
            }
        }
    }

    ordered
}
