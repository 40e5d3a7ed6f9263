//! Error types for mint-sdk

use crate::artifact::ArtifactKind;
use crate::manifest::ManifestKind;

/// Result type for mint-sdk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving artifacts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The active build configuration is custom and opts out of resolution
    #[error("SDK cannot be used with this configuration: {kind} '{name}' requested from a custom build")]
    UnsupportedMode { kind: ArtifactKind, name: String },

    /// Name absent from a bundled aggregate manifest
    #[error("cannot find {kind}: {name}")]
    NotFound { kind: ArtifactKind, name: String },

    /// The aggregate manifest itself is missing or malformed
    #[error("cannot fetch {manifest} manifest at {path}: {message}")]
    ManifestRead {
        manifest: ManifestKind,
        path: String,
        message: String,
    },

    /// An unbundled artifact file is missing or malformed
    #[error("bad {kind} '{name}' at {path}: {message}")]
    ArtifactRead {
        kind: ArtifactKind,
        name: String,
        path: String,
        message: String,
    },

    /// An artifact name that would resolve outside its folder
    #[error("invalid {kind} name '{name}': must not contain '..' segments")]
    InvalidName { kind: ArtifactKind, name: String },

    /// No root was given and none has been recorded or configured
    #[error("No root given and no active root recorded")]
    NoActiveRoot,

    /// Document store error
    #[error(transparent)]
    Fs(#[from] mint_fs::Error),
}

impl Error {
    /// Whether this error means the requested artifact does not exist,
    /// either as a missing key in an aggregate or an unreadable loose file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::ArtifactRead { .. } => true,
            Error::Fs(e) => e.is_not_found(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_missing_key() {
        let err = Error::NotFound {
            kind: ArtifactKind::Project,
            name: "B".into(),
        };
        assert_eq!(err.to_string(), "cannot find project: B");
        assert!(err.is_not_found());
    }

    #[test]
    fn unsupported_mode_is_not_a_missing_artifact() {
        let err = Error::UnsupportedMode {
            kind: ArtifactKind::Deployment,
            name: "token".into(),
        };
        assert!(err.to_string().contains("token"));
        assert!(!err.is_not_found());
    }
}
