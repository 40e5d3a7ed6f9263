//! Aggregate manifests produced by bundled builds

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque artifact payload. The resolver never looks inside.
pub type Payload = Value;
pub type ProjectDescriptor = Payload;
pub type DeploymentRecord = Payload;
pub type StaticManifest = Payload;

/// Which aggregate manifest a lookup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    Projects,
    Deployments,
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestKind::Projects => write!(f, "project"),
            ManifestKind::Deployments => write!(f, "deployment"),
        }
    }
}

/// Bundled projects and their static manifests, keyed by project name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    #[serde(default)]
    pub projects: HashMap<String, ProjectDescriptor>,

    #[serde(default)]
    pub static_manifests: HashMap<String, StaticManifest>,

    #[serde(default)]
    pub imports: Value,
}

/// Bundled deployments keyed by project name, then contract name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentManifest {
    #[serde(default)]
    pub deployments: HashMap<String, HashMap<String, DeploymentRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
}

impl DeploymentManifest {
    /// Remove and return the record for `contract` in `project`.
    pub fn take(&mut self, project: &str, contract: &str) -> Option<DeploymentRecord> {
        self.deployments.get_mut(project)?.remove(contract)
    }
}
