//! Artifact kinds and the per-kind lookup strategy
//!
//! Every artifact getter goes through the same custom / unbundled / bundled
//! branch. What differs between kinds is captured here: which folder holds
//! the loose files, which aggregate manifest holds the bundled copy, and how
//! the aggregate is indexed.

use std::fmt;

use mint_fs::NormalizedPath;

use crate::config::BuildConfiguration;
use crate::manifest::{DeploymentManifest, ManifestKind, Payload, ProjectManifest};

/// The kinds of artifact a client build publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Deployment,
    Project,
    StaticManifest,
}

impl ArtifactKind {
    /// Folder holding unbundled files of this kind.
    ///
    /// Deployments sit next to projects, matching where the bundled
    /// deployment manifest is read from.
    pub fn folder<'c>(&self, config: &'c BuildConfiguration) -> &'c str {
        match self {
            ArtifactKind::Deployment | ArtifactKind::Project => &config.projects_folder,
            ArtifactKind::StaticManifest => &config.static_manifest_folder,
        }
    }

    /// Aggregate manifest holding bundled artifacts of this kind.
    pub fn manifest(&self) -> ManifestKind {
        match self {
            ArtifactKind::Deployment => ManifestKind::Deployments,
            ArtifactKind::Project | ArtifactKind::StaticManifest => ManifestKind::Projects,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Deployment => write!(f, "deployment"),
            ArtifactKind::Project => write!(f, "project"),
            ArtifactKind::StaticManifest => write!(f, "static manifest"),
        }
    }
}

/// Whether a file stem stays inside the folder it is joined onto.
///
/// Stems may contain `/` (multi-project deployments), but no `..` segment.
pub fn is_contained(stem: &str) -> bool {
    !stem.replace('\\', "/").split('/').any(|segment| segment == "..")
}

/// A parsed aggregate manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate {
    Projects(ProjectManifest),
    Deployments(DeploymentManifest),
}

/// A single named artifact lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactRequest<'a> {
    pub kind: ArtifactKind,
    /// Artifact name: project name, or contract name for deployments
    pub name: &'a str,
    /// Owning project, only meaningful for deployments
    pub project: Option<&'a str>,
}

impl<'a> ArtifactRequest<'a> {
    pub fn project(name: &'a str) -> Self {
        Self {
            kind: ArtifactKind::Project,
            name,
            project: None,
        }
    }

    pub fn static_manifest(name: &'a str) -> Self {
        Self {
            kind: ArtifactKind::StaticManifest,
            name,
            project: None,
        }
    }

    pub fn deployment(contract: &'a str, project: &'a str) -> Self {
        Self {
            kind: ArtifactKind::Deployment,
            name: contract,
            project: Some(project),
        }
    }

    /// File stem of the loose file, relative to the kind's folder.
    ///
    /// Multi-project builds namespace deployments as `<project>/<contract>`.
    pub fn unbundled_stem(&self, config: &BuildConfiguration) -> String {
        match (self.kind, self.project) {
            (ArtifactKind::Deployment, Some(project)) if config.multi_project => {
                format!("{project}/{}", self.name)
            }
            _ => self.name.to_string(),
        }
    }

    /// Location of the loose file for this request.
    pub fn unbundled_path(&self, config: &BuildConfiguration) -> NormalizedPath {
        NormalizedPath::new(self.kind.folder(config)).join_json(&self.unbundled_stem(config))
    }

    /// Pull the requested payload out of an aggregate manifest.
    ///
    /// Returns `None` when the key is absent or the aggregate is of the
    /// wrong kind.
    pub fn index(&self, aggregate: Aggregate) -> Option<Payload> {
        match (self.kind, aggregate) {
            (ArtifactKind::Project, Aggregate::Projects(mut manifest)) => {
                manifest.projects.remove(self.name)
            }
            (ArtifactKind::StaticManifest, Aggregate::Projects(mut manifest)) => {
                manifest.static_manifests.remove(self.name)
            }
            (ArtifactKind::Deployment, Aggregate::Deployments(mut manifest)) => {
                manifest.take(self.project.unwrap_or_default(), self.name)
            }
            _ => None,
        }
    }
}
