//! Bootstrap constants

/// Environment variable prefix for boot configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "ARMATURE";

/// Default boot configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "armature.json";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "armature";

/// Token marking a component as part of the framework's own family
pub const FRAMEWORK_FAMILY: &str = "armature";

/// Name the application configuration repository is registered under
pub const APPLICATION_CONFIG_NAME: &str = "Application";

/// Environment filter variable read by ambient logging
pub const LOG_ENV_FILTER: &str = "ARMATURE_LOG";
