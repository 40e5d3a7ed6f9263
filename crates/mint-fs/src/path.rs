//! Normalized document paths

use std::path::Path;

/// A document path normalized to use forward slashes internally.
///
/// Document keys in a client build are prefix strings such as `/src/projects/`.
/// Keeping them as forward-slash strings makes the keys comparable across
/// platforms; conversion to a native path happens only in [`crate::FsDocumentStore`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Join this path with a segment.
    ///
    /// Exactly one `/` separates the two parts, whether or not the base ends
    /// with a slash or the segment starts with one. An empty base yields the
    /// segment unchanged.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        if self.inner.is_empty() {
            return Self { inner: segment };
        }
        let base = self.inner.trim_end_matches('/');
        let segment = segment.trim_start_matches('/');
        Self {
            inner: format!("{base}/{segment}"),
        }
    }

    /// Join `<name>.json` onto this path.
    pub fn join_json(&self, name: &str) -> Self {
        self.join(&format!("{name}.json"))
    }

    /// Return this path with a trailing slash, marking it as a folder prefix.
    pub fn as_dir(&self) -> Self {
        if self.inner.is_empty() || self.inner.ends_with('/') {
            self.clone()
        } else {
            Self {
                inner: format!("{}/", self.inner),
            }
        }
    }

    /// The path with any leading slashes removed, used to anchor a document
    /// key under a base directory.
    pub fn relative(&self) -> &str {
        self.inner.trim_start_matches('/')
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
