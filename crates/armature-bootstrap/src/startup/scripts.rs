//! Dynamic script registration
//!
//! Populates the script registry after the component set is known: manifest
//! script declarations first (component order), then script-registrar
//! markers, then markup templates loaded from the configured template
//! folders. Registration replaces by name, so the same layering rule as
//! texts applies: later sources win.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use armature_domain::ports::scripts::{DynamicScript, DynamicScriptRegistry, ScriptKind};

use super::components::ComponentSet;

/// Register every manifest-declared script, in component order
pub fn register_component_scripts(
    registry: &dyn DynamicScriptRegistry,
    components: &ComponentSet,
) -> usize {
    let mut registered = 0;
    for manifest in components.iter() {
        if let Some(scripts) = manifest.scripts {
            for script in scripts() {
                registry.set(script);
                registered += 1;
            }
        }
    }
    registered
}

/// Load markup templates from `folders` as `Template.*` scripts
///
/// Folders are scanned recursively in the given order; files inside a
/// folder apply in path order so the result is reproducible. A missing
/// folder contributes nothing; an unreadable file is skipped with a
/// warning.
pub fn register_template_scripts(
    registry: &dyn DynamicScriptRegistry,
    folders: &[PathBuf],
) -> usize {
    let mut registered = 0;
    for folder in folders {
        if !folder.is_dir() {
            debug!("template folder {} not present", folder.display());
            continue;
        }

        let mut files = Vec::new();
        collect_template_files(folder, &mut files);
        files.sort();

        for file in files {
            match template_script(&file) {
                Some(script) => {
                    registry.set(script);
                    registered += 1;
                }
                None => warn!("skipping unreadable template {}", file.display()),
            }
        }
    }
    registered
}

fn collect_template_files(folder: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(folder) else {
        warn!("cannot read template folder {}", folder.display());
        return;
    };

    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect_template_files(&path, out);
        } else if path
            .extension()
            .is_some_and(|ext| ext == "html" || ext == "htm")
        {
            out.push(path);
        }
    }
}

/// Build the `Template.*` script for one file, `None` when unreadable
fn template_script(file: &Path) -> Option<DynamicScript> {
    let stem = file.file_stem()?.to_str()?;
    let content = std::fs::read_to_string(file).ok()?;
    Some(DynamicScript::new(
        format!("Template.{stem}"),
        ScriptKind::Template,
        content,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_providers::scripts::DefaultDynamicScriptRegistry;

    #[test]
    fn templates_register_by_stem_recursively() {
        let registry = DefaultDynamicScriptRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("orders")).unwrap();
        std::fs::write(dir.path().join("dialog.html"), "<div/>").unwrap();
        std::fs::write(dir.path().join("orders/grid.html"), "<table/>").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a template").unwrap();

        let registered = register_template_scripts(&registry, &[dir.path().to_path_buf()]);
        assert_eq!(registered, 2);
        assert!(registry.get("Template.dialog").is_some());
        assert!(registry.get("Template.grid").is_some());
        assert!(registry.get("Template.notes").is_none());
    }

    #[test]
    fn missing_template_folder_is_fine() {
        let registry = DefaultDynamicScriptRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let registered =
            register_template_scripts(&registry, &[dir.path().join("absent")]);
        assert_eq!(registered, 0);
    }
}
