//! Artifact stores.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IoError, Result};

/// Destination for generated artifacts.
///
/// Paths are relative to the store's root. Generators read previous output
/// through [`ArtifactStore::read`]; the compiler persists new output through
/// [`ArtifactStore::write`].
pub trait ArtifactStore {
    /// Read a previously written artifact, or `None` if there is none.
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Write an artifact, replacing any previous content.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// Store rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactStore for FsStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        let full = self.root.join(path);
        match fs::read_to_string(&full) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(IoError::Read { path: full, source }),
        }
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|source| IoError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&full, contents).map_err(|source| IoError::Write {
            path: full.clone(),
            source,
        })?;
        debug!(path = %full.display(), bytes = contents.len(), "wrote artifact");
        Ok(())
    }
}

/// In-memory store, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of an artifact, if written.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All artifact paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        let path = Path::new("src/styles/theme-a.css");

        assert_eq!(store.read(path).unwrap(), None);
        store.write(path, "one").unwrap();
        store.write(path, "two").unwrap();

        assert_eq!(store.read(path).unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_fs_store_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FsStore::new(dir.path());
        let path = Path::new("generated/android/theme_a.kt");

        assert_eq!(store.read(path).unwrap(), None);
        store.write(path, "object A").unwrap();

        assert_eq!(fs::read_to_string(dir.path().join(path)).unwrap(), "object A");
        assert_eq!(store.read(path).unwrap().as_deref(), Some("object A"));
    }

    #[test]
    fn test_fs_store_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected.
        fs::write(dir.path().join("blocked"), "").unwrap();
        let mut store = FsStore::new(dir.path());

        let err = store.write(Path::new("blocked/theme.css"), "x").unwrap_err();
        assert!(matches!(err, IoError::CreateDir { .. }));
    }
}
