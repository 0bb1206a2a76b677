//! Error types for artman-config

use std::path::PathBuf;

use crate::schema::{ArtifactType, Language};

/// Result type for artman-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading an artifact configuration.
///
/// Messages are written for end users and embed the offending path or name.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Artman YAML cannot be found at `{}`. Please check the file location.", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Artman YAML {} is invalid: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Artman user YAML {} is invalid: {reason}", .path.display())]
    InvalidUserConfig { path: PathBuf, reason: String },

    #[error(
        "No artifact with `{name}` configured in artman yaml. Valid values are [{}]",
        .valid.join(", ")
    )]
    ArtifactNotFound { name: String, valid: Vec<String> },

    #[error("{artifact_type} artifact type is invalid for {}.", .language.display_name())]
    IncompatibleArtifact {
        language: Language,
        artifact_type: ArtifactType,
    },

    #[error(
        "\"..\" is disallowed in `{field}` field of `{}`. Please use either a path relative to `{}` (preferred), or an absolute path.",
        .config_path.display(),
        .base_dir.display()
    )]
    PathTraversalDisallowed {
        field: String,
        config_path: PathBuf,
        base_dir: PathBuf,
    },

    /// Filesystem error from artman-fs
    #[error(transparent)]
    Fs(#[from] artman_fs::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigNotFound,
    InvalidConfig,
    InvalidUserConfig,
    ArtifactNotFound,
    IncompatibleArtifact,
    PathTraversalDisallowed,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound { .. } => ErrorKind::ConfigNotFound,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            Self::InvalidUserConfig { .. } => ErrorKind::InvalidUserConfig,
            Self::ArtifactNotFound { .. } => ErrorKind::ArtifactNotFound,
            Self::IncompatibleArtifact { .. } => ErrorKind::IncompatibleArtifact,
            Self::PathTraversalDisallowed { .. } => ErrorKind::PathTraversalDisallowed,
            Self::Fs(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_message_embeds_path() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/tmp/artman.yaml"),
        };
        assert_eq!(
            err.to_string(),
            "Artman YAML cannot be found at `/tmp/artman.yaml`. Please check the file location."
        );
        assert_eq!(err.kind(), ErrorKind::ConfigNotFound);
    }

    #[test]
    fn artifact_not_found_lists_names_in_order() {
        let err = Error::ArtifactNotFound {
            name: "x".into(),
            valid: vec!["a".into(), "b".into(), "c".into()],
        };
        assert_eq!(
            err.to_string(),
            "No artifact with `x` configured in artman yaml. Valid values are [a, b, c]"
        );
    }

    #[test]
    fn incompatible_artifact_message() {
        let err = Error::IncompatibleArtifact {
            language: Language::Nodejs,
            artifact_type: ArtifactType::Grpc,
        };
        assert_eq!(err.to_string(), "GRPC artifact type is invalid for NodeJS.");
    }

    #[test]
    fn traversal_message_names_field_and_base() {
        let err = Error::PathTraversalDisallowed {
            field: "gapic_yaml".into(),
            config_path: PathBuf::from("/conf/artman.yaml"),
            base_dir: PathBuf::from("/conf"),
        };
        assert_eq!(
            err.to_string(),
            "\"..\" is disallowed in `gapic_yaml` field of `/conf/artman.yaml`. \
             Please use either a path relative to `/conf` (preferred), or an absolute path."
        );
    }
}
