//! Logger implementations

/// File-backed logger
pub mod file;
/// No-op logger
pub mod null;

pub use file::FileLogger;
pub use null::NullLogger;
