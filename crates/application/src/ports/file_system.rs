//! File system port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// The path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Access to the path was denied.
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for the file operations the use cases need.
pub trait FileSystem: Send + Sync {
    /// Reads a whole file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::NotFound`] if the file does not exist.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError>;

    /// Creates or truncates `path` and writes `contents` to it, creating
    /// missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;
}
