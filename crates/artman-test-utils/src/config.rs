//! [`TestConfig`] builder for artman YAML fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding artman documents and the files they point at.
///
/// # Example
///
/// ```rust,no_run
/// use artman_test_utils::TestConfig;
///
/// let fixture = TestConfig::new();
/// let config = fixture.write_artman_yaml("artman.yaml", "artifacts:\n  - name: foo\n");
/// fixture.touch("protos/x.proto");
/// assert!(config.is_file());
/// ```
pub struct TestConfig {
    temp_dir: TempDir,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfig {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestConfig::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the fixture.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write an artman YAML document at `relative` and return its absolute path.
    pub fn write_artman_yaml(&self, relative: &str, content: &str) -> PathBuf {
        self.write(relative, content)
    }

    /// Write a user preferences file at `relative` and return its absolute path.
    pub fn write_user_config(&self, relative: &str, content: &str) -> PathBuf {
        self.write(relative, content)
    }

    /// Create an empty file (and its parents) at `relative`.
    pub fn touch(&self, relative: &str) -> PathBuf {
        self.write(relative, "")
    }

    /// The path of `relative` as a string, for building expected values.
    pub fn display(&self, relative: &str) -> String {
        self.path(relative).to_string_lossy().into_owned()
    }

    fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestConfig: failed to create {parent:?}: {e}"));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestConfig: failed to write {path:?}: {e}"));
        path
    }
}

/// A representative multi-artifact artman document.
pub const PUBSUB_ARTMAN_YAML: &str = r#"
common:
  service_yaml: pubsub.yaml
  gapic_yaml: v1/pubsub_gapic.yaml
  src_proto_paths:
    - v1
    - -v1/internal.proto
artifacts:
  - name: java_gapic
    language: JAVA
    type: GAPIC
    publish_targets:
      - name: maven
        repo_url: https://oss.sonatype.org
        username: releaser
        password: secret
        publish_env: PROD
  - name: python_proto
    language: PYTHON
    type: PROTOBUF
    src_proto_paths:
      - v1/pubsub.proto
  - name: nodejs_grpc
    language: NODEJS
    type: GRPC
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_files() {
        let fixture = TestConfig::new();
        let path = fixture.write_artman_yaml("google/pubsub/artman.yaml", "common: {}\n");
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&path).unwrap(), "common: {}\n");
        assert!(path.starts_with(fixture.root()));
    }
}
