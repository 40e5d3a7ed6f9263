//! Build configuration and artifact resolution for InfinityMint client builds
//!
//! A client build ships its deployments, projects and static manifests
//! either as loose JSON files or packed into aggregate manifests. This crate
//! decides where to look for a named artifact given the build's
//! `infinitymint.build.json`:
//!
//! - **Custom** builds opt out; every lookup fails with [`Error::UnsupportedMode`].
//! - **Unbundled** builds read one file per artifact from a kind-specific folder.
//! - **Bundled** builds index into the project or deployment manifest.
//!
//! # Architecture
//!
//! ```text
//!          host application
//!                 |
//!     mint-sdk (ConfigurationStore)
//!                 |
//!       mint-fs (DocumentStore)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mint_fs::FsDocumentStore;
//! use mint_sdk::ConfigurationStore;
//!
//! let mut store = ConfigurationStore::new(FsDocumentStore::new("/srv/client"));
//! store.load("/src/")?;
//! let record = store.deployment("token", "my-project")?;
//! # Ok::<(), mint_sdk::Error>(())
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod interop;
pub mod logging;
pub mod manifest;
pub mod store;

pub use artifact::{Aggregate, ArtifactKind, ArtifactRequest};
pub use config::{
    BUILD_CONFIGURATION_FILENAME, BuildConfiguration, BuildMode, DEFAULT_MANIFEST_FILENAME,
    SdkOptions, build_configuration_path,
};
pub use error::{Error, Result};
pub use manifest::{
    DeploymentManifest, DeploymentRecord, ManifestKind, Payload, ProjectDescriptor,
    ProjectManifest, StaticManifest,
};
pub use store::ConfigurationStore;
