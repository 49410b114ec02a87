//! Error types for code generation.

use std::path::PathBuf;

use thiserror::Error;
use tokenforge_io::IoError;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// A web token registry could not be parsed.
    #[error("Invalid token registry {}: {source}", .path.display())]
    InvalidRegistry {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A web token registry was written by a newer version.
    #[error(
        "Token registry {} has version {found}, newest supported is {supported}",
        .path.display()
    )]
    UnsupportedRegistryVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading previous output failed.
    #[error(transparent)]
    Io(#[from] IoError),
}
