//! Error types for the tokenforge compiler.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("token source not found at {}", .path.display())]
    MissingTokenSource { path: PathBuf },

    #[error(
        "could not resolve primitive/component collections (primitive: {}, component: {}; keys: [{}])",
        .primitive.as_deref().unwrap_or("<none>"),
        .component.as_deref().unwrap_or("<none>"),
        .keys.join(", ")
    )]
    UnresolvedCollections {
        primitive: Option<String>,
        component: Option<String>,
        keys: Vec<String>,
    },

    #[error("unknown platform '{0}' (expected one of: web, android, ios, flutter, all)")]
    UnknownPlatform(String),

    #[error("no usable token documents under {}", .path.display())]
    NoUsableDocuments { path: PathBuf },
}

/// Errors confined to a single token document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document root is not a mapping")]
    NotAMapping,

    #[error(transparent)]
    Collections(#[from] ConfigError),

    #[error("no modes found under primitive collection '{collection}'")]
    NoPrimitiveModes { collection: String },

    #[error("collection '{collection}' is not a mapping")]
    InvalidCollection { collection: String },
}
