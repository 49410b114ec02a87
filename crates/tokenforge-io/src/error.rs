//! Error types for tokenforge-io.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for tokenforge-io operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors reading or writing generated artifacts.
#[derive(Debug, Error)]
pub enum IoError {
    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An existing artifact could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
