//! The configuration store
//!
//! [`ConfigurationStore`] caches one [`BuildConfiguration`] per root and
//! resolves artifacts against the active one. Every operation takes
//! `&mut self`; callers that share a store across threads must serialize
//! access themselves.

use std::collections::HashMap;
use std::sync::Arc;

use mint_fs::{DocumentStore, NormalizedPath};
use serde::de::DeserializeOwned;

use crate::artifact::{Aggregate, ArtifactKind, ArtifactRequest, is_contained};
use crate::config::{BuildConfiguration, BuildMode, SdkOptions, build_configuration_path};
use crate::manifest::{
    DeploymentManifest, DeploymentRecord, ManifestKind, Payload, ProjectDescriptor,
    ProjectManifest, StaticManifest,
};
use crate::{Error, Result, interop};

/// Caches build configurations and resolves artifacts for a client build.
///
/// # Example
///
/// ```no_run
/// use mint_fs::FsDocumentStore;
/// use mint_sdk::ConfigurationStore;
///
/// let mut store = ConfigurationStore::new(FsDocumentStore::new("/srv/client"));
/// store.load("/src/")?;
/// let project = store.project("my-project")?;
/// # Ok::<(), mint_sdk::Error>(())
/// ```
#[derive(Debug)]
pub struct ConfigurationStore<D> {
    documents: D,
    configurations: HashMap<String, Arc<BuildConfiguration>>,
    active_root: Option<String>,
    default_root: Option<String>,
    publish: bool,
}

impl<D: DocumentStore> ConfigurationStore<D> {
    /// Create a store reading documents from `documents`.
    pub fn new(documents: D) -> Self {
        Self {
            documents,
            configurations: HashMap::new(),
            active_root: None,
            default_root: None,
            publish: false,
        }
    }

    /// Root used when a call omits one and nothing has been loaded yet.
    pub fn with_default_root(mut self, root: impl Into<String>) -> Self {
        self.default_root = Some(root.into());
        self
    }

    /// Mirror the active root and configuration into [`crate::interop`].
    pub fn publishing(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    /// The underlying document store.
    pub fn documents(&self) -> &D {
        &self.documents
    }

    /// Mutable access to the underlying document store.
    pub fn documents_mut(&mut self) -> &mut D {
        &mut self.documents
    }

    /// Root recorded by the last `load` or `get`.
    pub fn active_root(&self) -> Option<&str> {
        self.active_root.as_deref()
    }

    /// Read the configuration for `root` and make it the active one.
    ///
    /// Any configuration previously cached for `root` is replaced, and the
    /// document is read past the document store's cache.
    pub fn load(&mut self, root: &str) -> Result<Arc<BuildConfiguration>> {
        self.documents.invalidate(&build_configuration_path(root));
        let config = Arc::new(self.read_build_configuration(root));
        tracing::debug!(root, mode = %config.mode(), "Loaded build configuration");
        self.configurations
            .insert(root.to_string(), Arc::clone(&config));
        self.activate(root, &config);
        Ok(config)
    }

    /// [`load`](Self::load) driven by host options.
    pub fn load_with(&mut self, options: &SdkOptions) -> Result<Arc<BuildConfiguration>> {
        let root = match options.root.as_deref() {
            Some(root) => root.to_string(),
            None => self.default_root.clone().ok_or(Error::NoActiveRoot)?,
        };
        self.load(&root)
    }

    /// Return the configuration for `root`, or for the active root when
    /// `root` is `None`.
    ///
    /// A cached configuration is returned as-is unless `force_reload` is set,
    /// in which case every cached document is dropped and the configuration
    /// read again, so edits and deletions made since the last read are
    /// observed on the next lookup.
    pub fn get(&mut self, root: Option<&str>, force_reload: bool) -> Result<Arc<BuildConfiguration>> {
        let root = self.resolve_root(root)?;

        let cached = self.configurations.get(&root).map(Arc::clone);
        let config = match cached {
            Some(cached) if !force_reload => cached,
            Some(_) => {
                let path = build_configuration_path(&root);
                self.documents.invalidate(&path);
                self.documents.clear();
                tracing::debug!(root = %root, "Reloading build configuration");
                let fresh = Arc::new(self.read_build_configuration(&root));
                self.configurations.insert(root.clone(), Arc::clone(&fresh));
                fresh
            }
            None => {
                let fresh = Arc::new(self.read_build_configuration(&root));
                self.configurations.insert(root.clone(), Arc::clone(&fresh));
                fresh
            }
        };

        self.activate(&root, &config);
        Ok(config)
    }

    /// Re-read the configuration for `root` (or the active root).
    pub fn refresh(&mut self, root: Option<&str>) -> Result<Arc<BuildConfiguration>> {
        self.get(root, true)
    }

    /// Read the build configuration document for `root`.
    ///
    /// A missing or malformed document is not an error: the cause is logged
    /// and the folder-convention defaults for `root` are returned instead.
    pub fn read_build_configuration(&mut self, root: &str) -> BuildConfiguration {
        let path = build_configuration_path(root);
        match self.documents.read_json::<BuildConfiguration>(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%path, error = %e, "Using default build configuration");
                BuildConfiguration::defaults_for_root(root)
            }
        }
    }

    /// Read the bundled project manifest of the active configuration.
    pub fn project_manifest(&mut self) -> Result<ProjectManifest> {
        self.read_manifest(ManifestKind::Projects)
    }

    /// Read the bundled deployment manifest of the active configuration.
    pub fn deployment_manifest(&mut self) -> Result<DeploymentManifest> {
        self.read_manifest(ManifestKind::Deployments)
    }

    /// Resolve the static manifest for `project`.
    pub fn static_manifest(&mut self, project: &str) -> Result<StaticManifest> {
        self.resolve(ArtifactRequest::static_manifest(project))
    }

    /// Resolve the project descriptor for `project`.
    pub fn project(&mut self, project: &str) -> Result<ProjectDescriptor> {
        self.resolve(ArtifactRequest::project(project))
    }

    /// Resolve the deployment record of `contract` in `project`.
    pub fn deployment(&mut self, contract: &str, project: &str) -> Result<DeploymentRecord> {
        self.resolve(ArtifactRequest::deployment(contract, project))
    }

    /// Read `<projectsFolder>/<name>.json` for `root` (or the active root).
    ///
    /// `name` is used verbatim, so multi-project callers pass
    /// `<project>/<contract>`.
    pub fn read_unbundled_deployment(
        &mut self,
        name: &str,
        root: Option<&str>,
    ) -> Result<DeploymentRecord> {
        self.read_unbundled_named(ArtifactKind::Deployment, name, root)
    }

    /// Read `<projectsFolder>/<name>.json` for `root` (or the active root).
    pub fn read_unbundled_project(
        &mut self,
        name: &str,
        root: Option<&str>,
    ) -> Result<ProjectDescriptor> {
        self.read_unbundled_named(ArtifactKind::Project, name, root)
    }

    /// Read `<staticManifestFolder>/<name>.json` for `root` (or the active root).
    pub fn read_unbundled_static_manifest(
        &mut self,
        name: &str,
        root: Option<&str>,
    ) -> Result<StaticManifest> {
        self.read_unbundled_named(ArtifactKind::StaticManifest, name, root)
    }

    /// The custom / unbundled / bundled branch shared by every artifact getter.
    fn resolve(&mut self, request: ArtifactRequest<'_>) -> Result<Payload> {
        let config = self.get(None, false)?;

        match config.mode() {
            BuildMode::Custom => {
                tracing::error!(kind = %request.kind, name = request.name, "Custom build cannot be resolved");
                Err(Error::UnsupportedMode {
                    kind: request.kind,
                    name: request.name.to_string(),
                })
            }
            BuildMode::Unbundled => {
                Self::check_contained(request.kind, request.name, &request.unbundled_stem(&config))?;
                let path = request.unbundled_path(&config);
                self.read_unbundled(request.kind, request.name, &path)
            }
            BuildMode::Bundled => {
                let aggregate = match request.kind.manifest() {
                    ManifestKind::Projects => Aggregate::Projects(self.project_manifest()?),
                    ManifestKind::Deployments => {
                        Aggregate::Deployments(self.deployment_manifest()?)
                    }
                };
                request.index(aggregate).ok_or_else(|| {
                    tracing::error!(kind = %request.kind, name = request.name, project = ?request.project, "Artifact missing from bundle");
                    Error::NotFound {
                        kind: request.kind,
                        name: request.name.to_string(),
                    }
                })
            }
        }
    }

    fn read_unbundled_named(
        &mut self,
        kind: ArtifactKind,
        name: &str,
        root: Option<&str>,
    ) -> Result<Payload> {
        let config = self.get(root, false)?;
        Self::check_contained(kind, name, name)?;
        let path = NormalizedPath::new(kind.folder(&config)).join_json(name);
        self.read_unbundled(kind, name, &path)
    }

    fn check_contained(kind: ArtifactKind, name: &str, stem: &str) -> Result<()> {
        if is_contained(stem) {
            return Ok(());
        }
        tracing::error!(%kind, name, stem, "Artifact name escapes its folder");
        Err(Error::InvalidName {
            kind,
            name: name.to_string(),
        })
    }

    fn read_unbundled(&mut self, kind: ArtifactKind, name: &str, path: &NormalizedPath) -> Result<Payload> {
        self.documents.read_json(path).map_err(|e| {
            tracing::error!(%kind, name, %path, error = %e, "Failed to read unbundled artifact");
            Error::ArtifactRead {
                kind,
                name: name.to_string(),
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }

    fn read_manifest<T: DeserializeOwned>(&mut self, kind: ManifestKind) -> Result<T> {
        let config = self.get(None, false)?;
        let path = config.manifest_path(kind);
        self.documents.invalidate(&path);
        self.documents.read_json(&path).map_err(|e| {
            tracing::error!(manifest = %kind, %path, error = %e, "Failed to read manifest");
            Error::ManifestRead {
                manifest: kind,
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }

    fn resolve_root(&self, root: Option<&str>) -> Result<String> {
        root.map(str::to_string)
            .or_else(|| self.active_root.clone())
            .or_else(|| self.default_root.clone())
            .ok_or(Error::NoActiveRoot)
    }

    fn activate(&mut self, root: &str, config: &Arc<BuildConfiguration>) {
        self.active_root = Some(root.to_string());
        if self.publish {
            interop::publish(root, Arc::clone(config));
        }
    }
}
