//! Artman YAML document parsing

use std::path::Path;

use artman_fs::ConfigStore;
use artman_fs::config::DocumentFormat;

use crate::diagnostics::Diagnostics;
use crate::schema::ConfigDocument;
use crate::{Error, Result};

/// Parse the artman YAML document at `path`.
///
/// Only the structure is checked here. Name uniqueness is left to
/// [`validate_document`](crate::validation::validate_document).
pub fn parse(path: &Path, diagnostics: &dyn Diagnostics) -> Result<ConfigDocument> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(?path, "Parsing artman config");
    let loaded = ConfigStore::new().load::<ConfigDocument>(path);
    finish(loaded, path, diagnostics)
}

/// Parse artman YAML held in memory, as if it had been read from `path`.
pub fn parse_str(
    content: &str,
    path: &Path,
    diagnostics: &dyn Diagnostics,
) -> Result<ConfigDocument> {
    let parsed = ConfigStore::new().parse::<ConfigDocument>(content, DocumentFormat::Yaml, path);
    finish(parsed, path, diagnostics)
}

fn finish(
    result: artman_fs::Result<ConfigDocument>,
    path: &Path,
    diagnostics: &dyn Diagnostics,
) -> Result<ConfigDocument> {
    match result {
        Ok(mut document) => {
            document.source = path.to_path_buf();
            tracing::debug!(artifacts = document.artifacts.len(), "Parsed artman config");
            Ok(document)
        }
        Err(e) if e.is_parse_error() => {
            diagnostics.error(&format!("Artman YAML {} is invalid.", path.display()));
            Err(Error::InvalidConfig {
                path: path.to_path_buf(),
                reason: parse_failure_reason(&e),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// The part of a parse failure worth showing next to the file path.
pub(crate) fn parse_failure_reason(error: &artman_fs::Error) -> String {
    match error {
        artman_fs::Error::ConfigParse { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticLevel, RecordingDiagnostics};
    use crate::schema::{ArtifactType, Language};
    use crate::ErrorKind;

    const PUBSUB: &str = r#"
common:
  api_name: pubsub
"#;

    #[test]
    fn test_parse_str_full_document() {
        let diagnostics = RecordingDiagnostics::new();
        let content = r#"
common:
  language: PYTHON
  service_yaml: pubsub.yaml
  src_proto_paths:
    - google/pubsub/v1
artifacts:
  - name: python_gapic
    type: GAPIC
    publish_targets:
      - name: pypi
        repo_url: https://upload.pypi.org/legacy/
        publish_env: PROD
  - name: nodejs_grpc
    language: NODEJS
"#;
        let document =
            parse_str(content, Path::new("/conf/artman.yaml"), &diagnostics).unwrap();

        assert_eq!(document.source, Path::new("/conf/artman.yaml"));
        assert_eq!(document.common.language, Some(Language::Python));
        assert_eq!(document.artifact_names(), vec!["python_gapic", "nodejs_grpc"]);
        assert_eq!(document.artifacts[0].artifact_type, Some(ArtifactType::Gapic));
        assert_eq!(document.artifacts[0].publish_targets()[0].name, "pypi");
        assert_eq!(document.artifacts[1].language, Some(Language::Nodejs));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_parse_str_empty_document() {
        let document = parse_str("", Path::new("artman.yaml"), &RecordingDiagnostics::new())
            .unwrap();
        assert!(document.artifacts.is_empty());
        assert_eq!(document.common, Default::default());
    }

    #[test]
    fn test_parse_str_bare_sections() {
        let diagnostics = RecordingDiagnostics::new();
        let document =
            parse_str("common:\nartifacts:\n", Path::new("artman.yaml"), &diagnostics).unwrap();
        assert!(document.artifacts.is_empty());
    }

    #[test]
    fn test_parse_str_accepts_camel_case_keys() {
        let content = r#"
common:
  serviceYaml: pubsub.yaml
  gapicYaml: pubsub_gapic.yaml
  srcProtoPaths: [v1]
artifacts:
  - name: java_gapic
    publishTargets:
      - name: maven
        repoUrl: https://example.com/maven
        publishEnv: PROD
"#;
        let diagnostics = RecordingDiagnostics::new();
        let document = parse_str(content, Path::new("artman.yaml"), &diagnostics).unwrap();

        assert_eq!(document.common.service_yaml.as_deref(), Some("pubsub.yaml"));
        assert_eq!(document.common.gapic_yaml.as_deref(), Some("pubsub_gapic.yaml"));
        assert_eq!(document.common.src_proto_paths, Some(vec!["v1".to_string()]));
        let target = &document.artifacts[0].publish_targets()[0];
        assert_eq!(target.repo_url.as_deref(), Some("https://example.com/maven"));
        assert_eq!(target.publish_env.as_deref(), Some("PROD"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_field_is_invalid_and_logged() {
        let diagnostics = RecordingDiagnostics::new();
        let err = parse_str(PUBSUB, Path::new("/conf/artman.yaml"), &diagnostics).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.to_string().contains("/conf/artman.yaml"));
        assert!(err.to_string().contains("api_name"));
        assert_eq!(
            diagnostics.messages(DiagnosticLevel::Error),
            vec!["Artman YAML /conf/artman.yaml is invalid."]
        );
    }

    #[test]
    fn test_unknown_enum_token_is_invalid() {
        let content = "artifacts:\n  - name: x\n    language: COBOL\n";
        let err = parse_str(content, Path::new("artman.yaml"), &RecordingDiagnostics::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_malformed_syntax_is_invalid() {
        let content = "artifacts: [\n";
        let err = parse_str(content, Path::new("artman.yaml"), &RecordingDiagnostics::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let diagnostics = RecordingDiagnostics::new();
        let err = parse(Path::new("/nonexistent/artman.yaml"), &diagnostics).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConfigNotFound);
        assert!(diagnostics.is_empty());
    }
}
