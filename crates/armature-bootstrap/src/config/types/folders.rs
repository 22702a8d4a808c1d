//! Folder layout configuration
//!
//! Fixed, ordered folder locations the text and script steps read overlays
//! from. A missing folder is never an error; it simply contributes nothing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_framework_texts() -> PathBuf {
    PathBuf::from("scripts/armature/texts")
}

fn default_site_texts() -> PathBuf {
    PathBuf::from("scripts/site/texts")
}

fn default_app_data_texts() -> PathBuf {
    PathBuf::from("app_data/texts")
}

fn default_template_folders() -> Vec<PathBuf> {
    vec![PathBuf::from("views/templates"), PathBuf::from("modules")]
}

fn default_script_folders() -> Vec<PathBuf> {
    vec![PathBuf::from("scripts/site")]
}

fn default_css_folders() -> Vec<PathBuf> {
    vec![PathBuf::from("content/site")]
}

/// On-disk layout the overlay steps scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderLayout {
    /// Framework text overlay folder (lowest overlay layer)
    #[serde(default = "default_framework_texts")]
    pub framework_texts: PathBuf,

    /// Site text overlay folder
    #[serde(default = "default_site_texts")]
    pub site_texts: PathBuf,

    /// Application-data text overlay folder (highest overlay layer)
    #[serde(default = "default_app_data_texts")]
    pub app_data_texts: PathBuf,

    /// Folders scanned for markup templates, in order
    #[serde(default = "default_template_folders")]
    pub template_folders: Vec<PathBuf>,

    /// Folders holding site script files (watched when enabled)
    #[serde(default = "default_script_folders")]
    pub script_folders: Vec<PathBuf>,

    /// Folders holding stylesheet files (watched when enabled)
    #[serde(default = "default_css_folders")]
    pub css_folders: Vec<PathBuf>,

    /// Start file watchers that re-register changed script payloads
    #[serde(default)]
    pub watch_for_changes: bool,
}

impl FolderLayout {
    /// Text overlay folders in override order: framework first, site next,
    /// application data last (and winning)
    pub fn text_overlay_folders(&self) -> [&Path; 3] {
        [
            self.framework_texts.as_path(),
            self.site_texts.as_path(),
            self.app_data_texts.as_path(),
        ]
    }

    /// Every folder the script watcher observes
    pub fn watch_folders(&self) -> Vec<PathBuf> {
        self.template_folders
            .iter()
            .chain(self.script_folders.iter())
            .chain(self.css_folders.iter())
            .cloned()
            .collect()
    }
}

impl Default for FolderLayout {
    fn default() -> Self {
        Self {
            framework_texts: default_framework_texts(),
            site_texts: default_site_texts(),
            app_data_texts: default_app_data_texts(),
            template_folders: default_template_folders(),
            script_folders: default_script_folders(),
            css_folders: default_css_folders(),
            watch_for_changes: false,
        }
    }
}
