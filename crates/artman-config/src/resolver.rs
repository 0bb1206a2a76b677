//! Artifact resolution: parse, validate, merge, normalize
//!
//! [`ArtifactLoader`] runs the whole pipeline for one artifact:
//!
//! 1. Parse the artman YAML document
//! 2. Reject duplicate artifact or publish target names
//! 3. Overlay the named artifact onto `common`
//! 4. Reject forbidden language/type combinations
//! 5. Resolve input paths against the document's directory
//!
//! Every call re-reads the document and returns an independent value.

use std::path::Path;
use std::sync::Arc;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::normalize::normalize;
use crate::schema::{ConfigDocument, EffectiveArtifactConfig};
use crate::user_config::{self, UserPreferences};
use crate::validation::{CompatibilityRules, validate_document};
use crate::{Error, Result, parser};

/// Loads and resolves artifact configurations.
pub struct ArtifactLoader {
    diagnostics: Arc<dyn Diagnostics>,
    rules: CompatibilityRules,
}

impl ArtifactLoader {
    /// A loader reporting through `tracing` with the built-in compatibility rules.
    pub fn new() -> Self {
        Self {
            diagnostics: Arc::new(TracingDiagnostics),
            rules: CompatibilityRules::with_builtins(),
        }
    }

    /// Report warnings and errors to `diagnostics` instead of `tracing`.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Replace the language/type compatibility rules.
    pub fn with_rules(mut self, rules: CompatibilityRules) -> Self {
        self.rules = rules;
        self
    }

    /// Parse the document at `path` and check name uniqueness.
    pub fn read_document(&self, path: impl AsRef<Path>) -> Result<ConfigDocument> {
        let path = path.as_ref();
        let document = parser::parse(path, self.diagnostics.as_ref())?;
        if let Some(reason) = validate_document(&document) {
            return Err(Error::InvalidConfig {
                path: path.to_path_buf(),
                reason,
            });
        }
        Ok(document)
    }

    /// Resolve `artifact_name` from the document at `path`.
    pub fn load(
        &self,
        path: impl AsRef<Path>,
        artifact_name: &str,
    ) -> Result<EffectiveArtifactConfig> {
        let document = self.read_document(path)?;
        self.resolve(&document, artifact_name)
    }

    /// Resolve `artifact_name` from an already parsed document.
    ///
    /// The first artifact with a matching name is overlaid onto `common`,
    /// checked against the compatibility rules and normalized against
    /// `document.source`.
    pub fn resolve(
        &self,
        document: &ConfigDocument,
        artifact_name: &str,
    ) -> Result<EffectiveArtifactConfig> {
        let mut merged = document.common.clone();
        let mut valid = Vec::with_capacity(document.artifacts.len());

        for artifact in &document.artifacts {
            valid.push(artifact.name().to_string());
            if artifact.name() != artifact_name {
                continue;
            }

            tracing::debug!(artifact = artifact_name, "Merging artifact onto common");
            merged.merge(artifact);
            let effective = EffectiveArtifactConfig::from(merged);
            self.rules.check(&effective)?;
            return normalize(effective, &document.source);
        }

        Err(Error::ArtifactNotFound {
            name: artifact_name.to_string(),
            valid,
        })
    }

    /// Load user preferences from `path`, which may start with `~`.
    ///
    /// A missing file is reported as a warning and yields defaults.
    pub fn load_user_preferences(&self, path: &str) -> Result<UserPreferences> {
        user_config::load_user_preferences(path, self.diagnostics.as_ref())
    }
}

impl Default for ArtifactLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `artifact_name` from the document at `path` with a default loader.
pub fn load_artifact_config(
    path: impl AsRef<Path>,
    artifact_name: &str,
) -> Result<EffectiveArtifactConfig> {
    ArtifactLoader::new().load(path, artifact_name)
}
