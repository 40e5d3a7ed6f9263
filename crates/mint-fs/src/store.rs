//! The document store seam
//!
//! A [`DocumentStore`] hands out raw document bytes by path. Stores may cache
//! what they read; callers that need to observe edits made behind the store's
//! back call [`DocumentStore::invalidate`] before reading again.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result};

/// Read-only source of raw documents keyed by path.
pub trait DocumentStore {
    /// Read the raw bytes of the document at `path`.
    ///
    /// Returns [`Error::NotFound`] when no document exists at `path`.
    fn read(&mut self, path: &NormalizedPath) -> Result<Arc<[u8]>>;

    /// Drop any cached copy of the document at `path`.
    ///
    /// Returns `true` if a cached entry was discarded.
    fn invalidate(&mut self, path: &NormalizedPath) -> bool;

    /// Drop every cached document.
    fn clear(&mut self);

    /// Read the document at `path` and deserialize it as JSON.
    fn read_json<T: DeserializeOwned>(&mut self, path: &NormalizedPath) -> Result<T>
    where
        Self: Sized,
    {
        let bytes = self.read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn read(&mut self, path: &NormalizedPath) -> Result<Arc<[u8]>> {
        (**self).read(path)
    }

    fn invalidate(&mut self, path: &NormalizedPath) -> bool {
        (**self).invalidate(path)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
