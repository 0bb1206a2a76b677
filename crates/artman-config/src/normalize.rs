//! Rewrites input path fields relative to the config document
//!
//! Output directories are not touched here.

use std::path::Path;

use artman_fs::{base_dir, has_parent_traversal, join_relative};

use crate::schema::{EXCLUSION_MARKER, EffectiveArtifactConfig};
use crate::{Error, Result};

/// Resolve `service_yaml`, `gapic_yaml` and every `src_proto_paths` entry
/// against the directory of `config_path`.
///
/// Exclusion markers on proto paths are kept in front of the rewritten path.
pub fn normalize(
    mut config: EffectiveArtifactConfig,
    config_path: &Path,
) -> Result<EffectiveArtifactConfig> {
    if let Some(service_yaml) = config.service_yaml.as_deref().filter(|p| !p.is_empty()) {
        config.service_yaml = Some(normalize_path(service_yaml, config_path, "service_yaml")?);
    }

    if let Some(gapic_yaml) = config.gapic_yaml.as_deref().filter(|p| !p.is_empty()) {
        config.gapic_yaml = Some(normalize_path(gapic_yaml, config_path, "gapic_yaml")?);
    }

    config.src_proto_paths = config
        .src_proto_paths
        .iter()
        .map(|entry| match entry.strip_prefix(EXCLUSION_MARKER) {
            Some(excluded) => normalize_path(excluded, config_path, "src_proto_paths")
                .map(|path| format!("{EXCLUSION_MARKER}{path}")),
            None => normalize_path(entry, config_path, "src_proto_paths"),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(config)
}

/// Resolve one path `field` against the directory of `config_path`.
///
/// Absolute paths come back unchanged. Any `..` traversal is rejected.
pub fn normalize_path(path: &str, config_path: &Path, field: &str) -> Result<String> {
    if has_parent_traversal(path) {
        return Err(Error::PathTraversalDisallowed {
            field: field.to_string(),
            config_path: config_path.to_path_buf(),
            base_dir: base_dir(config_path).to_path_buf(),
        });
    }
    Ok(join_relative(config_path, path))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const CONFIG: &str = "/home/u/conf/artman.yaml";

    #[test]
    fn test_normalize_rewrites_all_input_fields() {
        let config = EffectiveArtifactConfig {
            name: "foo".into(),
            service_yaml: Some("pubsub.yaml".into()),
            gapic_yaml: Some("/abs/pubsub_gapic.yaml".into()),
            src_proto_paths: vec!["protos/x.proto".into(), "-protos/y.proto".into()],
            ..Default::default()
        };

        let normalized = normalize(config, Path::new(CONFIG)).unwrap();

        assert_eq!(normalized.service_yaml.as_deref(), Some("/home/u/conf/pubsub.yaml"));
        assert_eq!(normalized.gapic_yaml.as_deref(), Some("/abs/pubsub_gapic.yaml"));
        assert_eq!(
            normalized.src_proto_paths,
            vec!["/home/u/conf/protos/x.proto", "-/home/u/conf/protos/y.proto"]
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let config = EffectiveArtifactConfig {
            service_yaml: Some("pubsub.yaml".into()),
            src_proto_paths: vec!["a".into(), "-b".into()],
            ..Default::default()
        };
        let once = normalize(config, Path::new(CONFIG)).unwrap();
        let twice = normalize(once.clone(), Path::new(CONFIG)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unset_and_empty_fields_are_left_alone() {
        let config = EffectiveArtifactConfig {
            service_yaml: Some(String::new()),
            ..Default::default()
        };
        let normalized = normalize(config, Path::new(CONFIG)).unwrap();
        assert_eq!(normalized.service_yaml.as_deref(), Some(""));
        assert_eq!(normalized.gapic_yaml, None);
    }

    #[rstest]
    #[case("../x")]
    #[case("a/../b")]
    #[case("a/..b")]
    #[case("/etc/../root")]
    fn test_traversal_rejected(#[case] path: &str) {
        let err = normalize_path(path, Path::new(CONFIG), "service_yaml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathTraversalDisallowed);
        let message = err.to_string();
        assert!(message.contains("`service_yaml`"));
        assert!(message.contains(CONFIG));
        assert!(message.contains("`/home/u/conf`"));
    }

    #[test]
    fn test_dots_inside_name_accepted() {
        assert_eq!(
            normalize_path("a..b", Path::new(CONFIG), "gapic_yaml").unwrap(),
            "/home/u/conf/a..b"
        );
    }

    #[test]
    fn test_excluded_traversal_names_proto_field() {
        let config = EffectiveArtifactConfig {
            src_proto_paths: vec!["ok".into(), "-../escape".into()],
            ..Default::default()
        };
        let err = normalize(config, Path::new(CONFIG)).unwrap_err();
        assert!(matches!(
            err,
            Error::PathTraversalDisallowed { ref field, .. } if field == "src_proto_paths"
        ));
    }
}
