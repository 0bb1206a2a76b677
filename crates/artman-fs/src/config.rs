//! Format-agnostic structured document loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result, io};

/// Structured document format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Detect the format of `path`.
    ///
    /// `.json` is JSON, any other extension (or none) is YAML.
    pub fn detect(path: &Path) -> Self {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json { Self::Json } else { Self::Yaml }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

/// Loads typed documents from disk.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize the document at `path`.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = DocumentFormat::detect(path);
        let content = io::read_text(path)?;
        self.parse(&content, format, path)
    }

    /// Deserialize `content` as `format`. `path` is only used for error context.
    ///
    /// An empty YAML document deserializes like an empty mapping.
    pub fn parse<T: DeserializeOwned>(
        &self,
        content: &str,
        format: DocumentFormat,
        path: &Path,
    ) -> Result<T> {
        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.label().into(),
            message,
        };

        match format {
            DocumentFormat::Yaml => {
                let mut value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
                if value.is_null() {
                    tracing::debug!(?path, "Empty YAML document, using empty mapping");
                    value = serde_yaml::Value::Mapping(Default::default());
                }
                serde_yaml::from_value(value).map_err(|e| parse_error(e.to_string()))
            }
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}
