//! Error types for randplot.
//!
//! Sampling and plotting never fail; errors only come from invalid
//! arguments, configuration files and the windowing backend.

use thiserror::Error;

/// Result type alias for randplot operations.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors that can occur in randplot.
#[derive(Debug, Error)]
pub enum DemoError {
    /// An argument was outside its accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Configuration could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while reading or writing configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The native window could not be created or the event loop failed.
    #[error("GUI error: {0}")]
    Gui(String),

    /// The global tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}

impl DemoError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<eframe::Error> for DemoError {
    fn from(err: eframe::Error) -> Self {
        Self::Gui(err.to_string())
    }
}
