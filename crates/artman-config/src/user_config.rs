//! Personal artman preferences (`~/.artman/config.yaml`)

use std::path::Path;

use artman_fs::{ConfigStore, expand_home};
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::parser::parse_failure_reason;
use crate::schema::null_as_default;
use crate::{Error, Result};

/// Default location of the user preferences file.
pub const DEFAULT_USER_CONFIG_PATH: &str = "~/.artman/config.yaml";

const MISSING_USER_CONFIG_WARNING: &str = "No artman user config defined. Use the default one \
    for this execution. Run `configure-artman` to set up user config.";

/// Personal defaults. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserPreferences {
    #[serde(deserialize_with = "null_as_default")]
    pub local: LocalPreferences,
    #[serde(deserialize_with = "null_as_default")]
    pub github: GithubCredentials,
}

/// Settings for the local machine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalPreferences {
    /// Path to a local toolkit checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolkit: Option<String>,
    /// Publish environment used when a target does not name one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_publish_env: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

impl GithubCredentials {
    /// Both username and token are present.
    pub fn is_configured(&self) -> bool {
        self.username.is_some() && self.token.is_some()
    }
}

impl std::fmt::Debug for GithubCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubCredentials")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Load preferences from `path`, expanding a leading `~` first.
pub fn load_user_preferences(path: &str, diagnostics: &dyn Diagnostics) -> Result<UserPreferences> {
    let expanded = expand_home(path)?;
    parse_user_preferences(&expanded, diagnostics)
}

/// Parse the preferences file at `path`.
///
/// When no file exists a warning is reported and defaults are returned.
pub fn parse_user_preferences(
    path: &Path,
    diagnostics: &dyn Diagnostics,
) -> Result<UserPreferences> {
    if !path.is_file() {
        diagnostics.warn(MISSING_USER_CONFIG_WARNING);
        return Ok(UserPreferences::default());
    }

    tracing::debug!(?path, "Loading artman user config");
    match ConfigStore::new().load::<UserPreferences>(path) {
        Ok(preferences) => Ok(preferences),
        Err(e) if e.is_parse_error() => {
            diagnostics.error(&format!("Artman user YAML {} is invalid.", path.display()));
            Err(Error::InvalidUserConfig {
                path: path.to_path_buf(),
                reason: parse_failure_reason(&e),
            })
        }
        Err(e) => Err(e.into()),
    }
}
