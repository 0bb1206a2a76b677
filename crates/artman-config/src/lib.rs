//! Artifact configuration loading for the artman pipeline.
//!
//! An artman YAML document has a `common` section of defaults and a list of
//! named `artifacts`. Loading an artifact parses the document, checks that
//! artifact and publish target names are unique, overlays the named artifact
//! onto `common`, checks language/type compatibility and finally rewrites the
//! input path fields relative to the document's own directory.
//!
//! # Example
//!
//! ```no_run
//! use artman_config::ArtifactLoader;
//!
//! let loader = ArtifactLoader::new();
//! let artifact = loader.load("googleapis/pubsub/artman_pubsub.yaml", "python_gapic")?;
//! println!("{:?} sources: {:?}", artifact.language, artifact.src_proto_paths);
//! # Ok::<(), artman_config::Error>(())
//! ```

pub mod diagnostics;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod schema;
pub mod user_config;
pub mod validation;

pub use diagnostics::{
    Diagnostic, DiagnosticLevel, Diagnostics, RecordingDiagnostics, TracingDiagnostics,
};
pub use error::{Error, ErrorKind, Result};
pub use normalize::{normalize, normalize_path};
pub use resolver::{ArtifactLoader, load_artifact_config};
pub use schema::{
    ArtifactConfig, ArtifactType, ConfigDocument, EffectiveArtifactConfig, Language, PublishTarget,
};
pub use user_config::{GithubCredentials, LocalPreferences, UserPreferences};
pub use validation::{CompatibilityRules, validate_artifact, validate_document};
