//! Cache sizing configuration

use serde::{Deserialize, Serialize};

fn default_local_capacity() -> usize {
    10_000
}

fn default_local_ttl_secs() -> u64 {
    300
}

/// Sizing for the default local cache
///
/// Which cache implementation is constructed comes from the runtime mode;
/// these values parameterize whichever one the selector picks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of entries in the local cache
    #[serde(default = "default_local_capacity")]
    pub local_capacity: usize,

    /// Local cache entry time-to-live in seconds
    #[serde(default = "default_local_ttl_secs")]
    pub local_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            local_capacity: default_local_capacity(),
            local_ttl_secs: default_local_ttl_secs(),
        }
    }
}
