//! Dynamic Script Registry Port
//!
//! Client-visible script payloads (lookups, form/column metadata, templates
//! and plain scripts) registered at startup and served to browsers by the
//! hosting layer. Registration is last-write-wins so file overlays and
//! watchers can replace a payload without touching its consumers.

use serde::{Deserialize, Serialize};

/// What a dynamic script payload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    /// Plain script payload
    Plain,
    /// Lookup data (key/value sets for client-side selects)
    Lookup,
    /// Form layout metadata
    Form,
    /// Column layout metadata
    Columns,
    /// Markup template
    Template,
}

/// One registered script payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicScript {
    /// Unique registration name (e.g. "Lookup.Northwind.Customer")
    pub name: String,
    /// Payload kind
    pub kind: ScriptKind,
    /// Payload body
    pub content: String,
}

impl DynamicScript {
    /// Create a script payload
    pub fn new<N: Into<String>, C: Into<String>>(name: N, kind: ScriptKind, content: C) -> Self {
        Self {
            name: name.into(),
            kind,
            content: content.into(),
        }
    }
}

/// Dynamic script registry capability
pub trait DynamicScriptRegistry: Send + Sync {
    /// Register `script` under its name, replacing any existing payload
    fn set(&self, script: DynamicScript);

    /// Look up a payload by registration name
    fn get(&self, name: &str) -> Option<DynamicScript>;

    /// Registered names, sorted
    fn names(&self) -> Vec<String>;

    /// Identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
