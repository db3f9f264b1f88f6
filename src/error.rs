//! Error types for compiling and rendering SVG libraries

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a file under the compile root was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// File bytes are not valid UTF-8
    InvalidChars,
    /// Trimmed content has no `<svg ...> ... </svg>` span
    InvalidFormat,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::InvalidChars => f.write_str("invalid_chars"),
            InvalidReason::InvalidFormat => f.write_str("invalid_format"),
        }
    }
}

/// Errors that abort a compile pass
///
/// None of these are retryable: the same input reproduces the same error.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Compile root is missing or not a directory
    #[error("compile root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Two files (or a file and the starting library) resolve to the same key
    #[error("duplicate SVG key: {key}")]
    DuplicateKey { key: String },

    /// A file could not be turned into an entry
    #[error("invalid SVG file {key}: {reason}")]
    InvalidFile { key: String, reason: InvalidReason },

    /// Filesystem failure while walking or reading
    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The library key this error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            CompileError::DuplicateKey { key } | CompileError::InvalidFile { key, .. } => {
                Some(key.as_str())
            }
            CompileError::RootNotFound { .. } | CompileError::Io { .. } => None,
        }
    }
}

/// Errors returned when rendering an entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("SVG {key} not found in library")]
    NotFound { key: String },
}
