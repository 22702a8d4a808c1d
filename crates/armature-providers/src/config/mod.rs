//! Configuration repository implementations

/// JSON application-settings repository
pub mod json_settings;
/// No-op configuration repository
pub mod null;

pub use json_settings::JsonSettingsRepository;
pub use null::NullConfigRepository;
