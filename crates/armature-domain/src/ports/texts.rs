//! Localized Text Registry Port

use serde::{Deserialize, Serialize};

/// Locale id used for texts that carry no locale of their own
pub const INVARIANT_LOCALE: &str = "invariant";

/// One localized text entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalText {
    /// Locale identifier (e.g. "en", "en-US", [`INVARIANT_LOCALE`])
    pub locale: String,
    /// Dotted text key (e.g. "site.dialogs.confirm")
    pub key: String,
    /// The text itself
    pub text: String,
}

impl LocalText {
    /// Create an entry in the invariant locale
    pub fn invariant<K: Into<String>, T: Into<String>>(key: K, text: T) -> Self {
        Self {
            locale: INVARIANT_LOCALE.to_string(),
            key: key.into(),
            text: text.into(),
        }
    }

    /// Create an entry for a specific locale
    pub fn new<L: Into<String>, K: Into<String>, T: Into<String>>(
        locale: L,
        key: K,
        text: T,
    ) -> Self {
        Self {
            locale: locale.into(),
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Localized text registry capability
///
/// `set` is last-write-wins: the orchestrator registers text sources in
/// layer order so application overlays override framework defaults for the
/// same key. Lookup falls back along the locale chain (e.g. "en-US" → "en" →
/// invariant); the fallback policy belongs to the implementation.
pub trait LocalTextRegistry: Send + Sync {
    /// Store `text` for `key` in `locale`, replacing any existing value
    fn set(&self, locale: &str, key: &str, text: &str);

    /// Look up the text for `key` in `locale`, following locale fallback
    fn get(&self, locale: &str, key: &str) -> Option<String>;

    /// Store every entry, in order
    fn set_all(&self, texts: &[LocalText]) {
        for text in texts {
            self.set(&text.locale, &text.key, &text.text);
        }
    }

    /// Number of stored (locale, key) pairs
    fn entry_count(&self) -> usize;

    /// Identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
