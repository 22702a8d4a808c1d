//! Script and stylesheet file watchers
//!
//! Optional background observers started at the end of dynamic script
//! registration. Their whole contract: detect a change under a watched
//! folder and re-register the affected payload in the script registry. They
//! run independently after startup, on the watcher's own threads, and never
//! re-enter the orchestrator.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use notify::{recommended_watcher, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use armature_domain::error::{Error, Result};
use armature_domain::ports::scripts::{DynamicScript, DynamicScriptRegistry, ScriptKind};

/// Keep-alive handle for the background file watcher
///
/// Registered in the service registry so the observers live as long as the
/// process. Dropping the handle stops watching.
pub struct ScriptWatcher {
    _watcher: Mutex<RecommendedWatcher>,
    folders: Vec<PathBuf>,
}

impl ScriptWatcher {
    /// Folders under observation
    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }
}

impl std::fmt::Debug for ScriptWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptWatcher")
            .field("folders", &self.folders)
            .finish()
    }
}

/// Start watching `folders` and re-register changed payloads into `scripts`
///
/// Folders that do not exist are skipped; watching nothing is valid (the
/// handle simply observes no events).
pub fn watch_for_changes(
    scripts: Arc<dyn DynamicScriptRegistry>,
    folders: Vec<PathBuf>,
) -> Result<ScriptWatcher> {
    let registry = Arc::clone(&scripts);
    let mut watcher = recommended_watcher(move |result: notify::Result<Event>| match result {
        Ok(event) => {
            for path in &event.paths {
                refresh_script_payload(registry.as_ref(), path);
            }
        }
        Err(e) => warn!("file watcher error: {e}"),
    })
    .map_err(|e| Error::configuration_with_source("failed to start file watcher", e))?;

    let mut watched = Vec::new();
    for folder in folders {
        if !folder.is_dir() {
            debug!("watch folder {} not present; skipping", folder.display());
            continue;
        }
        watcher
            .watch(&folder, RecursiveMode::Recursive)
            .map_err(|e| {
                Error::configuration_with_source(
                    format!("failed to watch folder {}", folder.display()),
                    e,
                )
            })?;
        watched.push(folder);
    }

    info!(folders = watched.len(), "script file watcher started");
    Ok(ScriptWatcher {
        _watcher: Mutex::new(watcher),
        folders: watched,
    })
}

/// Re-register the payload for one changed file
///
/// Deleted or unreadable files are ignored: the previously registered
/// payload stands until a readable replacement shows up.
pub(crate) fn refresh_script_payload(scripts: &dyn DynamicScriptRegistry, path: &Path) {
    let Some(script) = script_for_path(path) else {
        return;
    };
    debug!(name = %script.name, "re-registering changed script payload");
    scripts.set(script);
}

fn script_for_path(path: &Path) -> Option<DynamicScript> {
    let stem = path.file_stem()?.to_str()?;
    let extension = path.extension()?.to_str()?;

    let (name, kind) = match extension {
        "html" | "htm" => (format!("Template.{stem}"), ScriptKind::Template),
        "js" => (format!("Script.{stem}"), ScriptKind::Plain),
        "css" => (format!("Css.{stem}"), ScriptKind::Plain),
        _ => return None,
    };

    let content = std::fs::read_to_string(path).ok()?;
    Some(DynamicScript::new(name, kind, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_providers::scripts::DefaultDynamicScriptRegistry;

    #[test]
    fn refresh_reregisters_known_extensions() {
        let registry = DefaultDynamicScriptRegistry::new();
        let dir = tempfile::tempdir().unwrap();

        let css = dir.path().join("site.css");
        std::fs::write(&css, "body {}").unwrap();
        refresh_script_payload(&registry, &css);
        assert_eq!(registry.get("Css.site").unwrap().content, "body {}");

        std::fs::write(&css, "body { margin: 0 }").unwrap();
        refresh_script_payload(&registry, &css);
        assert_eq!(
            registry.get("Css.site").unwrap().content,
            "body { margin: 0 }"
        );
    }

    #[test]
    fn refresh_ignores_unknown_and_missing_files() {
        let registry = DefaultDynamicScriptRegistry::new();
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("readme.txt");
        std::fs::write(&txt, "hello").unwrap();
        refresh_script_payload(&registry, &txt);
        refresh_script_payload(&registry, &dir.path().join("gone.js"));
        assert!(registry.names().is_empty());
    }

    #[test]
    fn watcher_skips_missing_folders() {
        let registry: Arc<dyn DynamicScriptRegistry> =
            Arc::new(DefaultDynamicScriptRegistry::new());
        let dir = tempfile::tempdir().unwrap();

        let watcher = watch_for_changes(
            registry,
            vec![dir.path().to_path_buf(), dir.path().join("absent")],
        )
        .unwrap();
        assert_eq!(watcher.folders().len(), 1);
    }
}
