//! Error types for module discovery

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid module configuration in package '{package}' at '{path}': {message}")]
    InvalidModuleConfiguration {
        package: String,
        path: String,
        message: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed package manifest {path:?}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn invalid(
        package: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::InvalidModuleConfiguration {
            package: package.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports malformed module metadata rather than an
    /// environment failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidModuleConfiguration { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
