//! Provider constants

/// Default local cache capacity in entries
pub const CACHE_DEFAULT_CAPACITY: usize = 10_000;

/// Default cache entry time-to-live in seconds
pub const CACHE_DEFAULT_TTL_SECS: u64 = 300;

/// Environment prefix for application settings overrides
pub const SETTINGS_ENV_PREFIX: &str = "APP";

/// Default application log file name
pub const LOGGER_DEFAULT_FILE: &str = "armature.log";
