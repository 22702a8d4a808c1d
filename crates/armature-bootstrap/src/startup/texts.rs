//! Layered local text registration
//!
//! Text sources are applied in a fixed layer order, and `set` on the text
//! registry is last-write-wins, so later layers override earlier ones per
//! (locale, key):
//!
//! 1. framework built-ins
//! 2. nested/declared manifest texts (component order, declaration order)
//! 3. enum-derived manifest texts
//! 4. entity-derived manifest texts
//! 5. JSON file overlays: framework folder, site folder, application-data
//!    folder, so application overlays always win
//!
//! This order is a contract, not an implementation detail.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use armature_domain::ports::texts::{LocalText, LocalTextRegistry, INVARIANT_LOCALE};

use super::components::ComponentSet;

/// Framework default texts, the lowest layer
pub fn builtin_texts() -> Vec<LocalText> {
    vec![
        LocalText::invariant("dialogs.ok", "OK"),
        LocalText::invariant("dialogs.cancel", "Cancel"),
        LocalText::invariant("dialogs.yes", "Yes"),
        LocalText::invariant("dialogs.no", "No"),
        LocalText::invariant("validation.required", "{0} is required."),
        LocalText::invariant("validation.invalid_value", "{0} has an invalid value."),
        LocalText::invariant("validation.out_of_range", "{0} is out of range."),
        LocalText::invariant("errors.unexpected", "An unexpected error occurred."),
    ]
}

/// Register every manifest-declared text source in layer order
pub fn register_component_texts(registry: &dyn LocalTextRegistry, components: &ComponentSet) {
    // Declared (nested) texts across all components come before any
    // enum-derived text, mirroring the registration sequence the override
    // chain is specified against.
    for manifest in components.iter() {
        if let Some(nested) = manifest.nested_texts {
            registry.set_all(&nested());
        }
    }
    for manifest in components.iter() {
        if let Some(enums) = manifest.enum_texts {
            registry.set_all(&enums());
        }
    }
    for manifest in components.iter() {
        if let Some(entities) = manifest.entity_texts {
            registry.set_all(&entities());
        }
    }
}

/// Apply every `*.json` overlay file in `folder`, in file-name order
///
/// A missing folder contributes nothing. A malformed file is skipped with a
/// warning; the remaining files still apply. Returns the number of text
/// entries registered.
pub fn add_texts_from_folder(registry: &dyn LocalTextRegistry, folder: &Path) -> usize {
    if !folder.is_dir() {
        debug!("text overlay folder {} not present", folder.display());
        return 0;
    }

    let mut files: Vec<_> = match std::fs::read_dir(folder) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(e) => {
            warn!(
                "cannot read text overlay folder {}: {e}",
                folder.display()
            );
            return 0;
        }
    };
    files.sort();

    let mut added = 0;
    for file in files {
        match apply_overlay_file(registry, &file) {
            Ok(count) => added += count,
            Err(e) => warn!(
                "skipping text overlay {}: {e}",
                file.display()
            ),
        }
    }
    added
}

fn apply_overlay_file(
    registry: &dyn LocalTextRegistry,
    file: &Path,
) -> armature_domain::error::Result<usize> {
    use armature_domain::error::Error;

    let contents = std::fs::read_to_string(file)
        .map_err(|e| Error::overlay_with_source(format!("cannot read {}", file.display()), e))?;
    let root: Value = serde_json::from_str(&contents)
        .map_err(|e| Error::overlay_with_source(format!("invalid JSON in {}", file.display()), e))?;

    let Value::Object(map) = root else {
        return Err(Error::overlay(format!(
            "{} must hold a JSON object at the top level",
            file.display()
        )));
    };

    let locale = locale_from_file_stem(file);
    let mut added = 0;
    for (key, value) in map {
        added += flatten_into(registry, &locale, &key, &value);
    }
    Ok(added)
}

/// Locale id encoded in the file name, if any
///
/// The trailing dot-segment of the stem names the locale: `texts.de.json`
/// and `site.texts.de-AT.json` are German overlays, plain `texts.json` is
/// invariant.
fn locale_from_file_stem(file: &Path) -> String {
    let stem = file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    match stem.rsplit_once('.') {
        Some((_, locale)) if !locale.is_empty() => locale.to_string(),
        _ => INVARIANT_LOCALE.to_string(),
    }
}

/// Register `value` under `key`, recursing into objects with dotted keys
fn flatten_into(
    registry: &dyn LocalTextRegistry,
    locale: &str,
    key: &str,
    value: &Value,
) -> usize {
    match value {
        Value::Object(map) => {
            let mut added = 0;
            for (child_key, child_value) in map {
                let joined = format!("{key}.{child_key}");
                added += flatten_into(registry, locale, &joined, child_value);
            }
            added
        }
        Value::String(text) => {
            registry.set(locale, key, text);
            1
        }
        Value::Null => 0,
        other => {
            registry.set(locale, key, &other.to_string());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_providers::texts::DefaultLocalTextRegistry;

    #[test]
    fn flattens_nested_objects_with_dotted_keys() {
        let registry = DefaultLocalTextRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("texts.json"),
            r#"{"site": {"dialogs": {"confirm": "Sure?"}, "title": "Home"}}"#,
        )
        .unwrap();

        let added = add_texts_from_folder(&registry, dir.path());
        assert_eq!(added, 2);
        assert_eq!(
            registry
                .get(INVARIANT_LOCALE, "site.dialogs.confirm")
                .as_deref(),
            Some("Sure?")
        );
    }

    #[test]
    fn file_stem_names_the_locale() {
        let registry = DefaultLocalTextRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("texts.de.json"), r#"{"greeting": "hallo"}"#).unwrap();

        add_texts_from_folder(&registry, dir.path());
        assert_eq!(registry.get("de", "greeting").as_deref(), Some("hallo"));
        assert_eq!(registry.get(INVARIANT_LOCALE, "greeting"), None);
    }

    #[test]
    fn malformed_file_is_skipped_but_others_apply() {
        let registry = DefaultLocalTextRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), "{ broken").unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"ok": "fine"}"#).unwrap();

        let added = add_texts_from_folder(&registry, dir.path());
        assert_eq!(added, 1);
        assert_eq!(registry.get(INVARIANT_LOCALE, "ok").as_deref(), Some("fine"));
    }

    #[test]
    fn missing_folder_contributes_nothing() {
        let registry = DefaultLocalTextRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let added = add_texts_from_folder(&registry, &dir.path().join("absent"));
        assert_eq!(added, 0);
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let registry = DefaultLocalTextRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("01-base.json"), r#"{"k": "base"}"#).unwrap();
        std::fs::write(dir.path().join("02-override.json"), r#"{"k": "override"}"#).unwrap();

        add_texts_from_folder(&registry, dir.path());
        assert_eq!(
            registry.get(INVARIANT_LOCALE, "k").as_deref(),
            Some("override")
        );
    }
}
