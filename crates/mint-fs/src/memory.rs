//! In-memory document store
//!
//! Holds a pre-bundled set of documents in process. Every read is recorded so
//! callers can observe exactly which keys a resolution touched.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::{DocumentStore, Error, NormalizedPath, Result};

/// A document store backed by a map of path to bytes.
#[derive(Debug, Default, Clone)]
pub struct MemoryDocumentStore {
    documents: HashMap<NormalizedPath, Arc<[u8]>>,
    reads: Vec<NormalizedPath>,
    invalidations: Vec<NormalizedPath>,
    clears: usize,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the raw document at `path`.
    pub fn insert(&mut self, path: impl Into<NormalizedPath>, bytes: impl Into<Vec<u8>>) {
        let bytes: Vec<u8> = bytes.into();
        self.documents.insert(path.into(), bytes.into());
    }

    /// Serialize `value` as JSON and store it at `path`.
    pub fn insert_json<T: Serialize>(
        &mut self,
        path: impl Into<NormalizedPath>,
        value: &T,
    ) -> Result<()> {
        let path = path.into();
        let bytes = serde_json::to_vec(value).map_err(|e| Error::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        self.documents.insert(path, bytes.into());
        Ok(())
    }

    /// Remove the document at `path`, returning whether it existed.
    pub fn remove(&mut self, path: &NormalizedPath) -> bool {
        self.documents.remove(path).is_some()
    }

    /// Every path passed to [`DocumentStore::read`], in call order.
    pub fn reads(&self) -> &[NormalizedPath] {
        &self.reads
    }

    /// Every path passed to [`DocumentStore::invalidate`], in call order.
    pub fn invalidations(&self) -> &[NormalizedPath] {
        &self.invalidations
    }

    /// How many times [`DocumentStore::clear`] was called.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// How many times `path` was read.
    pub fn read_count(&self, path: &str) -> usize {
        self.reads.iter().filter(|p| p.as_str() == path).count()
    }

    /// Forget the read and invalidation logs.
    pub fn clear_log(&mut self) {
        self.reads.clear();
        self.invalidations.clear();
        self.clears = 0;
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read(&mut self, path: &NormalizedPath) -> Result<Arc<[u8]>> {
        self.reads.push(path.clone());
        self.documents
            .get(path)
            .map(Arc::clone)
            .ok_or_else(|| Error::NotFound {
                path: path.to_string(),
            })
    }

    // Nothing is cached beyond the documents themselves.
    fn invalidate(&mut self, path: &NormalizedPath) -> bool {
        self.invalidations.push(path.clone());
        false
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
