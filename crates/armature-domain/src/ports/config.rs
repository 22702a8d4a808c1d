//! Configuration Repository Port

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Configuration repository capability
///
/// Read-only access to application settings, organized as named sections of
/// JSON values. The default implementation is backed by a JSON settings
/// file; the orchestrator registers it under the name `"Application"`.
pub trait ConfigRepository: Send + Sync {
    /// Read a whole section, `None` when the section does not exist
    fn section(&self, section: &str) -> Result<Option<Value>>;

    /// Read one key inside a section
    fn value(&self, section: &str, key: &str) -> Result<Option<Value>>;

    /// Identifier of this provider implementation (e.g. "json-settings")
    fn provider_name(&self) -> &str;
}

/// Deserialize a section into a typed settings struct
///
/// Kept as a free function so [`ConfigRepository`] stays object-safe.
pub fn load_section<T: DeserializeOwned>(
    repository: &dyn ConfigRepository,
    section: &str,
) -> Result<Option<T>> {
    match repository.section(section)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
