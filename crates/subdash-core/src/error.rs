//! Error types for subdash-core

use thiserror::Error;

/// Result type alias for subdash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for subdash operations
#[derive(Debug, Error)]
pub enum Error {
    /// Git query failed (command missing, non-zero exit, libgit2 error)
    #[error("Git error: {0}")]
    Git(String),

    /// Manifest could not be read
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern error
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<git2::Error> for Error {
    fn from(err: git2::Error) -> Self {
        Error::Git(err.message().to_string())
    }
}

impl From<globset::Error> for Error {
    fn from(err: globset::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// Fieldless error category for cheap pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Git query error
    Git,
    /// Manifest read error
    Manifest,
    /// Configuration error
    Config,
    /// I/O operation error
    Io,
    /// Glob pattern error
    Pattern,
    /// YAML parsing error
    Yaml,
    /// JSON serialization error
    Json,
}

impl Error {
    /// Get the error kind
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Git(_) => ErrorKind::Git,
            Error::Manifest(_) => ErrorKind::Manifest,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
            Error::Pattern(_) => ErrorKind::Pattern,
            Error::Yaml(_) => ErrorKind::Yaml,
            Error::Json(_) => ErrorKind::Json,
        }
    }

    /// Borrow the error message without the category prefix.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Git(msg)
            | Error::Manifest(msg)
            | Error::Config(msg)
            | Error::Pattern(msg)
            | Error::Yaml(msg)
            | Error::Json(msg) => msg,
            Error::Io(_) => "I/O error",
        }
    }
}
