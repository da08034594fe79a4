//! Error types for ProfileKit.
//!
//! Library crates use [`ProfileKitError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all ProfileKit operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileKitError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network-level fault during a fetch (timeout, refused, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from a fetched page.
    #[error("{url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    /// URL or HTML parsing error during extraction.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A persisted file exists but does not parse as expected.
    #[error("failed to parse {path:?}: {message}")]
    FileParse { path: PathBuf, message: String },

    /// Data validation error (presence checks, join mismatches).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ProfileKitError>;

impl ProfileKitError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a file-format parse failure with the offending path.
    pub fn file_parse(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::FileParse {
            path: path.into(),
            message: msg.into(),
        }
    }
}
