//! Token document discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tokenforge_core::ConfigError;

use crate::error::{CompileError, Result};

/// Where a run reads its token documents from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// One document. Any failure compiling it fails the run.
    File(PathBuf),
    /// Every `*.json` file directly under a directory, sorted by file name.
    /// Documents that fail to compile are skipped.
    Directory { path: PathBuf, documents: Vec<PathBuf> },
}

impl TokenSource {
    /// Inspect `path` and list the documents it provides.
    pub fn discover(path: &Path) -> Result<Self> {
        if path.is_file() {
            return Ok(TokenSource::File(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(ConfigError::MissingTokenSource {
                path: path.to_path_buf(),
            }
            .into());
        }

        let read_error = |source| CompileError::Read {
            path: path.to_path_buf(),
            source,
        };
        let mut documents = Vec::new();
        for entry in fs::read_dir(path).map_err(read_error)? {
            let entry_path = entry.map_err(read_error)?.path();
            let is_json = entry_path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json && entry_path.is_file() {
                documents.push(entry_path);
            }
        }
        documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        if documents.is_empty() {
            return Err(ConfigError::NoUsableDocuments {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(TokenSource::Directory {
            path: path.to_path_buf(),
            documents,
        })
    }

    /// Documents in processing order.
    pub fn documents(&self) -> &[PathBuf] {
        match self {
            TokenSource::File(path) => std::slice::from_ref(path),
            TokenSource::Directory { documents, .. } => documents,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, TokenSource::File(_))
    }

    /// The path the source was discovered from.
    pub fn path(&self) -> &Path {
        match self {
            TokenSource::File(path) | TokenSource::Directory { path, .. } => path,
        }
    }
}

/// Name of a document as used in theme names and file headers: its file stem.
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
