//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Armature composition root
///
/// The startup taxonomy is deliberately small:
///
/// - [`Error::Configuration`] is fatal. Orchestration aborts and the process
///   must not proceed to serve traffic.
/// - [`Error::Discovery`] degrades. The offending component is excluded from
///   the component set, the condition is logged, and discovery continues.
/// - [`Error::Overlay`] recovers locally. The offending overlay file is
///   skipped and the remaining layers stand.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error: a capability default could not be wired,
    /// a step precondition is missing, or boot configuration is invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Component discovery error: a manifest is malformed or conflicting
    #[error("Discovery error: {message}")]
    Discovery {
        /// Description of the discovery error
        message: String,
    },

    /// Overlay load error: a text/script override file could not be applied
    #[error("Overlay error: {message}")]
    Overlay {
        /// Description of the overlay error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Logging backend error
    #[error("Logging error: {message}")]
    Logging {
        /// Description of the logging error
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Discovery and overlay error creation methods
impl Error {
    /// Create a discovery error
    pub fn discovery<S: Into<String>>(message: S) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    /// Create an overlay error
    pub fn overlay<S: Into<String>>(message: S) -> Self {
        Self::Overlay {
            message: message.into(),
            source: None,
        }
    }

    /// Create an overlay error with source
    pub fn overlay_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Overlay {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Remaining error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a logging error
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error must abort startup
    ///
    /// Discovery and overlay errors are handled where they occur; anything
    /// else that reaches the orchestrator propagates to the host.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Discovery { .. } | Self::Overlay { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_fatal() {
        assert!(Error::configuration("no default mapping").is_fatal());
        assert!(Error::internal("broken").is_fatal());
    }

    #[test]
    fn discovery_and_overlay_errors_are_recoverable() {
        assert!(!Error::discovery("duplicate manifest").is_fatal());
        assert!(!Error::overlay("bad json").is_fatal());
    }

    #[test]
    fn error_messages_include_context() {
        let err = Error::configuration("no provider named 'ghost'");
        assert!(err.to_string().contains("ghost"));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::overlay_with_source("texts.json", json_err);
        assert!(err.to_string().contains("texts.json"));
    }
}
