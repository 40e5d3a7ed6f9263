//! Build configuration types
//!
//! The build configuration is the `infinitymint.build.json` document found at
//! the root of a client build. It says where artifacts live and how they are
//! packaged.

use std::fmt;

use mint_fs::NormalizedPath;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::manifest::ManifestKind;

/// File name of the build configuration document, relative to a root.
pub const BUILD_CONFIGURATION_FILENAME: &str = "infinitymint.build.json";

/// Manifest file stem used when the configuration does not name one.
pub const DEFAULT_MANIFEST_FILENAME: &str = "manifest";

/// How artifacts of a build are served, in dispatch precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// The build opts out of this resolver entirely.
    Custom,
    /// Artifacts are packed into aggregate manifest documents.
    Bundled,
    /// Each artifact lives in its own file under a kind-specific folder.
    Unbundled,
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Custom => write!(f, "custom"),
            BuildMode::Bundled => write!(f, "bundled"),
            BuildMode::Unbundled => write!(f, "unbundled"),
        }
    }
}

/// Settings from `infinitymint.build.json`.
///
/// Unknown keys in the document are ignored. The four folder fields are
/// required; a document missing any of them does not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub deployments_folder: String,
    pub gems_folder: String,
    pub projects_folder: String,
    pub static_manifest_folder: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_manifest_filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployments_manifest_filename: Option<String>,

    /// Artifacts are served from aggregate manifests
    #[serde(default)]
    pub bundled: bool,

    /// The build is served some other way and must not be resolved here
    #[serde(default)]
    pub custom: bool,

    /// Deployments are namespaced per project
    #[serde(default)]
    pub multi_project: bool,

    /// Open key-value bag for host settings
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl BuildConfiguration {
    /// The folder-convention configuration used when a root publishes no
    /// readable build configuration.
    pub fn defaults_for_root(root: &str) -> Self {
        let root = NormalizedPath::new(root);
        let folder = |name: &str| root.join(name).as_dir().as_str().to_string();

        Self {
            deployments_folder: folder("deployments"),
            gems_folder: folder("gems"),
            projects_folder: folder("projects"),
            static_manifest_folder: folder("projects"),
            projects_manifest_filename: None,
            deployments_manifest_filename: None,
            bundled: false,
            custom: false,
            multi_project: false,
            settings: Map::new(),
        }
    }

    /// Summarise the mode flags. `custom` wins over `bundled`.
    pub fn mode(&self) -> BuildMode {
        if self.custom {
            BuildMode::Custom
        } else if self.bundled {
            BuildMode::Bundled
        } else {
            BuildMode::Unbundled
        }
    }

    pub fn projects_manifest_filename(&self) -> &str {
        self.projects_manifest_filename
            .as_deref()
            .unwrap_or(DEFAULT_MANIFEST_FILENAME)
    }

    pub fn deployments_manifest_filename(&self) -> &str {
        self.deployments_manifest_filename
            .as_deref()
            .unwrap_or(DEFAULT_MANIFEST_FILENAME)
    }

    /// Location of an aggregate manifest. Both live in the projects folder.
    pub fn manifest_path(&self, kind: ManifestKind) -> NormalizedPath {
        let filename = match kind {
            ManifestKind::Projects => self.projects_manifest_filename(),
            ManifestKind::Deployments => self.deployments_manifest_filename(),
        };
        NormalizedPath::new(&self.projects_folder).join_json(filename)
    }

    /// Look up a host setting by key.
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

/// Location of the build configuration document for `root`.
pub fn build_configuration_path(root: &str) -> NormalizedPath {
    NormalizedPath::new(root).join(BUILD_CONFIGURATION_FILENAME)
}

/// Host-facing options for [`crate::ConfigurationStore::load_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkOptions {
    /// Root of the client build. Falls back to the store's default root.
    pub root: Option<String>,
}

impl SdkOptions {
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}
