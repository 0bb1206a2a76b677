//! Document and artifact validation

use std::collections::HashSet;

use crate::schema::{ArtifactType, ConfigDocument, EffectiveArtifactConfig, Language};
use crate::{Error, Result};

/// Check that artifact names are unique in the document and publish target
/// names are unique within each artifact.
///
/// Returns the message for the first violation in document order, or `None`.
pub fn validate_document(document: &ConfigDocument) -> Option<String> {
    let mut artifacts = HashSet::new();
    for artifact in &document.artifacts {
        if !artifacts.insert(artifact.name()) {
            return Some(format!(
                "artifact `{}` has been configured twice, please rename.",
                artifact.name()
            ));
        }

        let mut targets = HashSet::new();
        for target in artifact.publish_targets() {
            if !targets.insert(target.name.as_str()) {
                return Some(format!(
                    "publish target `{}` in artifact `{}` has been configured twice, please rename.",
                    target.name,
                    artifact.name()
                ));
            }
        }
    }

    None
}

/// Check a merged artifact against the built-in compatibility rules.
pub fn validate_artifact(config: &EffectiveArtifactConfig) -> Result<()> {
    CompatibilityRules::with_builtins().check(config)
}

/// Set of forbidden `(language, type)` combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityRules {
    forbidden: HashSet<(Language, ArtifactType)>,
}

impl CompatibilityRules {
    /// Rules shipped with artman.
    pub fn with_builtins() -> Self {
        Self::empty().forbid(Language::Nodejs, ArtifactType::Grpc)
    }

    /// No restrictions at all.
    pub fn empty() -> Self {
        Self {
            forbidden: HashSet::new(),
        }
    }

    /// Add a forbidden combination.
    pub fn forbid(mut self, language: Language, artifact_type: ArtifactType) -> Self {
        self.forbidden.insert((language, artifact_type));
        self
    }

    pub fn is_forbidden(&self, language: Language, artifact_type: ArtifactType) -> bool {
        self.forbidden.contains(&(language, artifact_type))
    }

    pub fn check(&self, config: &EffectiveArtifactConfig) -> Result<()> {
        if self.is_forbidden(config.language, config.artifact_type) {
            return Err(Error::IncompatibleArtifact {
                language: config.language,
                artifact_type: config.artifact_type,
            });
        }
        Ok(())
    }
}

impl Default for CompatibilityRules {
    fn default() -> Self {
        Self::with_builtins()
    }
}
