//! Application error types

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::{CodecError, FileSystemError};

/// Errors surfaced by the read and write use cases.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The descriptor file does not exist.
    #[error("descriptor not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// Underlying file system error.
        #[source]
        source: FileSystemError,
    },

    /// Reading from or writing to a caller-supplied stream failed.
    #[error("stream I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// The content is not a well-formed descriptor.
    #[error("malformed descriptor: {0}")]
    Parse(String),

    /// A write was requested for a model with no associated location.
    #[error("model has no associated location to write to")]
    MissingLocation,

    /// The model holds something that cannot be serialized.
    #[error("cannot serialize model: {0}")]
    Encode(String),
}

/// Coarse classification of a [`ModelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelErrorKind {
    /// The source path does not exist.
    NotFound,
    /// A source or target could not be read or written.
    Io,
    /// Malformed descriptor content.
    Parse,
    /// The model cannot be written in its current state.
    IllegalState,
}

impl ModelError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ModelErrorKind {
        match self {
            Self::NotFound(_) => ModelErrorKind::NotFound,
            Self::Io { .. } | Self::Stream(_) => ModelErrorKind::Io,
            Self::Parse(_) => ModelErrorKind::Parse,
            Self::MissingLocation | Self::Encode(_) => ModelErrorKind::IllegalState,
        }
    }

    /// Maps a file system failure on `path`, keeping `NotFound` distinct.
    pub(crate) fn from_file_system(path: &std::path::Path, error: FileSystemError) -> Self {
        match error {
            FileSystemError::NotFound(path) => Self::NotFound(path),
            source => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

impl From<CodecError> for ModelError {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::Malformed(message) => Self::Parse(message),
            CodecError::Unencodable(message) => Self::Encode(message),
        }
    }
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
