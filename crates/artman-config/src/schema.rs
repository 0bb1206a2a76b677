//! Typed schema of an artman YAML document
//!
//! Every field of [`ArtifactConfig`] tracks presence through `Option`, so an
//! unset field on an artifact can be told apart from one set to an empty
//! value when the artifact is overlaid onto `common`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Marker prefixed to a `src_proto_paths` entry to exclude it.
pub const EXCLUSION_MARKER: char = '-';

/// Target language of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    LanguageUnspecified,
    Java,
    Python,
    Nodejs,
    Ruby,
    Go,
    Csharp,
    Php,
}

impl Language {
    /// The token used for this language in artman YAML.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::LanguageUnspecified => "LANGUAGE_UNSPECIFIED",
            Language::Java => "JAVA",
            Language::Python => "PYTHON",
            Language::Nodejs => "NODEJS",
            Language::Ruby => "RUBY",
            Language::Go => "GO",
            Language::Csharp => "CSHARP",
            Language::Php => "PHP",
        }
    }

    /// Human-facing name, used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::LanguageUnspecified => "an unspecified language",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Nodejs => "NodeJS",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::Csharp => "C#",
            Language::Php => "PHP",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of artifact to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactType {
    #[default]
    ArtifactTypeUnspecified,
    /// Full client library: GAPIC surface plus gRPC stubs.
    Gapic,
    /// GAPIC surface without the gRPC stubs.
    GapicOnly,
    /// gRPC client stubs only.
    Grpc,
    /// Shared gRPC bundle for common protos.
    GrpcCommon,
    /// Compiled proto messages only.
    Protobuf,
    /// Generated GAPIC config, no code.
    GapicConfig,
}

impl ArtifactType {
    /// The token used for this type in artman YAML.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::ArtifactTypeUnspecified => "ARTIFACT_TYPE_UNSPECIFIED",
            ArtifactType::Gapic => "GAPIC",
            ArtifactType::GapicOnly => "GAPIC_ONLY",
            ArtifactType::Grpc => "GRPC",
            ArtifactType::GrpcCommon => "GRPC_COMMON",
            ArtifactType::Protobuf => "PROTOBUF",
            ArtifactType::GapicConfig => "GAPIC_CONFIG",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named destination for publishing a generated artifact.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishTarget {
    pub name: String,
    #[serde(alias = "repoUrl", skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Never serialized.
    #[serde(skip_serializing)]
    pub password: Option<String>,
    #[serde(alias = "publishEnv", skip_serializing_if = "Option::is_none")]
    pub publish_env: Option<String>,
}

impl fmt::Debug for PublishTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishTarget")
            .field("name", &self.name)
            .field("repo_url", &self.repo_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("publish_env", &self.publish_env)
            .finish()
    }
}

/// A partial artifact configuration.
///
/// Used both for the `common` section and for each entry of `artifacts`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<ArtifactType>,
    #[serde(alias = "serviceYaml", skip_serializing_if = "Option::is_none")]
    pub service_yaml: Option<String>,
    #[serde(alias = "gapicYaml", skip_serializing_if = "Option::is_none")]
    pub gapic_yaml: Option<String>,
    #[serde(alias = "srcProtoPaths", skip_serializing_if = "Option::is_none")]
    pub src_proto_paths: Option<Vec<String>>,
    #[serde(alias = "publishTargets", skip_serializing_if = "Option::is_none")]
    pub publish_targets: Option<Vec<PublishTarget>>,
}

impl ArtifactConfig {
    /// The artifact name, or `""` when unset.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// The publish targets, or an empty slice when unset.
    pub fn publish_targets(&self) -> &[PublishTarget] {
        self.publish_targets.as_deref().unwrap_or_default()
    }

    /// Overlay `other` onto this config.
    ///
    /// Every field set on `other` replaces the field here, sequences
    /// included. Fields unset on `other` are left alone.
    pub fn merge(&mut self, other: &ArtifactConfig) {
        overlay(&mut self.name, &other.name);
        overlay(&mut self.language, &other.language);
        overlay(&mut self.artifact_type, &other.artifact_type);
        overlay(&mut self.service_yaml, &other.service_yaml);
        overlay(&mut self.gapic_yaml, &other.gapic_yaml);
        overlay(&mut self.src_proto_paths, &other.src_proto_paths);
        overlay(&mut self.publish_targets, &other.publish_targets);
    }
}

fn overlay<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if let Some(value) = other {
        *base = Some(value.clone());
    }
}

/// Root of a parsed artman YAML document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigDocument {
    /// Defaults shared by every artifact.
    #[serde(deserialize_with = "null_as_default")]
    pub common: ArtifactConfig,

    /// Named artifacts, in document order.
    #[serde(deserialize_with = "null_as_default")]
    pub artifacts: Vec<ArtifactConfig>,

    /// File the document was read from. Relative path fields resolve
    /// against its directory.
    #[serde(skip)]
    pub source: PathBuf,
}

impl ConfigDocument {
    /// Artifact names in document order.
    pub fn artifact_names(&self) -> Vec<&str> {
        self.artifacts.iter().map(ArtifactConfig::name).collect()
    }
}

/// Treat an explicit `null` (e.g. a bare `common:` key) like an absent section.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fully merged configuration for one artifact.
///
/// Unset scalars take their zero value, unset sequences are empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EffectiveArtifactConfig {
    pub name: String,
    pub language: Language,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_yaml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gapic_yaml: Option<String>,
    pub src_proto_paths: Vec<String>,
    pub publish_targets: Vec<PublishTarget>,
}

impl EffectiveArtifactConfig {
    /// Proto source paths without the exclusion marker.
    pub fn included_proto_paths(&self) -> impl Iterator<Item = &str> {
        self.src_proto_paths
            .iter()
            .filter(|path| !path.starts_with(EXCLUSION_MARKER))
            .map(String::as_str)
    }

    /// Excluded proto source paths, with the marker stripped.
    pub fn excluded_proto_paths(&self) -> impl Iterator<Item = &str> {
        self.src_proto_paths
            .iter()
            .filter_map(|path| path.strip_prefix(EXCLUSION_MARKER))
    }

    /// Look up a publish target by name.
    pub fn publish_target(&self, name: &str) -> Option<&PublishTarget> {
        self.publish_targets.iter().find(|target| target.name == name)
    }
}

impl From<ArtifactConfig> for EffectiveArtifactConfig {
    fn from(config: ArtifactConfig) -> Self {
        Self {
            name: config.name.unwrap_or_default(),
            language: config.language.unwrap_or_default(),
            artifact_type: config.artifact_type.unwrap_or_default(),
            service_yaml: config.service_yaml,
            gapic_yaml: config.gapic_yaml,
            src_proto_paths: config.src_proto_paths.unwrap_or_default(),
            publish_targets: config.publish_targets.unwrap_or_default(),
        }
    }
}
