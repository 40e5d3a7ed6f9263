//! [`TestBuild`] builder for client-build test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use mint_fs::FsDocumentStore;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary directory standing in for the parent of a client build.
///
/// Document keys such as `/src/projects/foo.json` land at
/// `<base>/src/projects/foo.json`, the same anchoring [`FsDocumentStore`]
/// applies.
///
/// # Example
///
/// ```rust,no_run
/// use mint_test_utils::TestBuild;
/// use serde_json::json;
///
/// let build = TestBuild::new();
/// build.write_config("/src/", &TestBuild::unbundled_config("/src/"));
/// build.write_json("/src/projects/foo.json", &json!({ "name": "Foo" }));
/// build.assert_file_exists("/src/infinitymint.build.json");
/// ```
pub struct TestBuild {
    temp_dir: TempDir,
}

impl Default for TestBuild {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuild {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the base directory of the build.
    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Native location of a document key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.base().join(key.trim_start_matches('/'))
    }

    /// A document store reading from this build.
    pub fn store(&self) -> FsDocumentStore {
        FsDocumentStore::new(self.base())
    }

    /// Write `value` as pretty JSON at document key `key`, creating parents.
    pub fn write_json(&self, key: &str, value: &Value) {
        self.write_raw(key, &serde_json::to_string_pretty(value).unwrap());
    }

    /// Write raw text at document key `key`, creating parents.
    pub fn write_raw(&self, key: &str, content: &str) {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
    }

    /// Write `infinitymint.build.json` under `root`.
    pub fn write_config(&self, root: &str, config: &Value) {
        let key = format!("{}/infinitymint.build.json", root.trim_end_matches('/'));
        self.write_json(&key, config);
    }

    /// Delete the document at `key`.
    pub fn remove(&self, key: &str) {
        fs::remove_file(self.path(key)).unwrap();
    }

    /// An unbundled, single-project configuration using the folder
    /// conventions under `root`, with static manifests in `static/`.
    pub fn unbundled_config(root: &str) -> Value {
        let root = root.trim_end_matches('/');
        json!({
            "deploymentsFolder": format!("{root}/deployments/"),
            "gemsFolder": format!("{root}/gems/"),
            "projectsFolder": format!("{root}/projects/"),
            "staticManifestFolder": format!("{root}/static/"),
        })
    }

    /// [`Self::unbundled_config`] with `bundled` switched on.
    pub fn bundled_config(root: &str) -> Value {
        let mut config = Self::unbundled_config(root);
        config["bundled"] = json!(true);
        config
    }

    /// Assert that the document at `key` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file does not exist.
    pub fn assert_file_exists(&self, key: &str) {
        let full_path = self.path(key);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
