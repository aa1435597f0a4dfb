//! Theme error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme configuration file could not be read.
    #[error("failed to read theme config {path:?}: {source}")]
    ConfigRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a theme configuration document.
    #[error("failed to parse theme config: {details}")]
    ConfigParse {
        /// Details about the parse error.
        details: String,
    },

    /// An override key does not name a known class role.
    #[error("unknown class role '{role}' in override key '{key}'")]
    UnknownRole {
        /// The offending override key.
        key: String,
        /// The role part that failed to parse.
        role: String,
    },

    /// An override key is not of the form `Widget.role`.
    #[error("malformed override key '{key}', expected 'Widget.role'")]
    MalformedKey {
        /// The offending override key.
        key: String,
    },
}

impl ThemeError {
    /// Create a config read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse error.
    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::ConfigParse {
            details: details.into(),
        }
    }

    /// Create an unknown role error.
    pub fn unknown_role(key: impl Into<String>, role: impl Into<String>) -> Self {
        Self::UnknownRole {
            key: key.into(),
            role: role.into(),
        }
    }

    /// Create a malformed key error.
    pub fn malformed_key(key: impl Into<String>) -> Self {
        Self::MalformedKey { key: key.into() }
    }
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;
