//! Error types for a compiler run.

use std::path::PathBuf;

use thiserror::Error;
use tokenforge_codegen::CodegenError;
use tokenforge_core::{ConfigError, DocumentError};
use tokenforge_io::IoError;

/// Result type alias for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Errors that can occur during a run.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Invalid configuration; nothing can be compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A token document could not be compiled.
    #[error("{}: {source}", .path.display())]
    Document {
        path: PathBuf,
        source: DocumentError,
    },

    /// A token document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A generator failed.
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// Writing an artifact failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

impl CompileError {
    /// Whether the error only affects the document it came from.
    pub fn is_per_document(&self) -> bool {
        matches!(self, CompileError::Document { .. } | CompileError::Read { .. })
    }
}
