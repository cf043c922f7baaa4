//! Error types for relnotify.
//!
//! Library crates use [`RelnotifyError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all relnotify operations.
#[derive(Debug, thiserror::Error)]
pub enum RelnotifyError {
    /// Configuration loading or validation error (missing channel, token, etc.).
    #[error("config error: {message}")]
    Config { message: String },

    /// One or more declared asset patterns matched no file.
    #[error("no files matched the following asset patterns:\n{}", .patterns.join("\n"))]
    UnmatchedAssets { patterns: Vec<String> },

    /// An asset pattern is not a valid glob.
    #[error("invalid asset pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A resolved asset disappeared before it could be uploaded.
    #[error("asset file not found at upload time: {}", .path.display())]
    MissingAsset { path: PathBuf },

    /// Network, HTTP, or chat API error.
    #[error("transport error: {0}")]
    Transport(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (malformed response, bad input, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RelnotifyError>;

impl RelnotifyError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a transport error from any displayable message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
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
}
