//! Runtime mode configuration
//!
//! Distinguishes the hosting environment the process runs in. The mode is
//! decided once at process start, from boot configuration, and held
//! immutable for the process lifetime; the component selector uses it to
//! pick concrete defaults for each capability.

use serde::{Deserialize, Serialize};

/// Hosting environment for the process
///
/// - `ManagedHosted`: running inside a managed application server that keeps
///   the process alive across many requests. This is the default.
/// - `LightweightHosted`: self-hosted or short-lived processes (CLI tools,
///   integration harnesses) that prefer framework-native, dependency-light
///   defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeMode {
    /// Hosted by a managed application server
    #[default]
    ManagedHosted,

    /// Self-hosted / lightweight process
    LightweightHosted,
}

impl RuntimeMode {
    /// Check if running managed-hosted
    pub fn is_managed(self) -> bool {
        self == Self::ManagedHosted
    }

    /// Check if running lightweight-hosted
    pub fn is_lightweight(self) -> bool {
        self == Self::LightweightHosted
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ManagedHosted => "managed-hosted",
            Self::LightweightHosted => "lightweight-hosted",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_managed() {
        assert!(RuntimeMode::default().is_managed());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let mode: RuntimeMode = serde_json::from_str(r#""lightweight-hosted""#).unwrap();
        assert!(mode.is_lightweight());
        assert_eq!(
            serde_json::to_string(&RuntimeMode::ManagedHosted).unwrap(),
            r#""managed-hosted""#
        );
    }
}
