//! Error types for decouple

use std::path::PathBuf;

/// Result type for decouple operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or resolving settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse INI settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Failed to open settings file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid truth value: {value}")]
    InvalidTruthValue { value: String },

    #[error("{option} not found. Declare it as envvar or define a default value.")]
    OptionNotFound { option: String },

    #[error("Invalid value for {option}: {message}")]
    InvalidValue { option: String, message: String },

    #[error("Unknown coercion: {name}")]
    UnknownCoercion { name: String },
}

impl Error {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_value(option: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidValue {
            option: option.into(),
            message: message.to_string(),
        }
    }

    /// Whether the error happened while building a repository (as opposed to
    /// resolving a single option).
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Open { .. } | Self::Io { .. })
    }
}
