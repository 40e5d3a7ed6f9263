//! Disk-backed document store with a module-style read cache

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{DocumentStore, Error, NormalizedPath, Result};

/// Serves documents from a directory on disk.
///
/// Document paths are anchored under `base`: the key `/src/projects/foo.json`
/// resolves to `<base>/src/projects/foo.json`. Every successful read is
/// cached until [`DocumentStore::invalidate`] or [`DocumentStore::clear`]
/// drops it, so edits on disk are only observed after invalidation.
#[derive(Debug)]
pub struct FsDocumentStore {
    base: PathBuf,
    cache: HashMap<NormalizedPath, Arc<[u8]>>,
}

impl FsDocumentStore {
    /// Create a store rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            cache: HashMap::new(),
        }
    }

    /// Native location of the document at `path`.
    pub fn resolve(&self, path: &NormalizedPath) -> PathBuf {
        self.base.join(path.relative())
    }

    /// Whether the document at `path` is currently cached.
    pub fn is_cached(&self, path: &NormalizedPath) -> bool {
        self.cache.contains_key(path)
    }
}

impl DocumentStore for FsDocumentStore {
    fn read(&mut self, path: &NormalizedPath) -> Result<Arc<[u8]>> {
        if let Some(cached) = self.cache.get(path) {
            tracing::trace!(%path, "Document cache hit");
            return Ok(Arc::clone(cached));
        }

        let native = self.resolve(path);
        let bytes: Arc<[u8]> = match fs::read(&native) {
            Ok(bytes) => bytes.into(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(Error::io(native, e)),
        };

        tracing::debug!(%path, native = %native.display(), "Loaded document from disk");
        self.cache.insert(path.clone(), Arc::clone(&bytes));
        Ok(bytes)
    }

    fn invalidate(&mut self, path: &NormalizedPath) -> bool {
        let removed = self.cache.remove(path).is_some();
        if removed {
            tracing::debug!(%path, "Invalidated cached document");
        }
        removed
    }

    fn clear(&mut self) {
        tracing::debug!(entries = self.cache.len(), "Cleared document cache");
        self.cache.clear();
    }
}
