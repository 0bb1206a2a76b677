//! Path helpers for config-relative fields

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Expand a leading `~` or `~/` into the current user's home directory.
///
/// Any other input is returned as-is.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(path)),
    };

    let home = dirs::home_dir().ok_or_else(|| Error::HomeDirUnavailable {
        path: path.to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Whether `path` starts with `..` or contains a `/..` segment anywhere.
///
/// This is a textual check: `a..b` passes, `a/..b` does not.
pub fn has_parent_traversal(path: &str) -> bool {
    path.starts_with("..") || path.contains("/..")
}

/// The directory containing the file at `config_path`.
///
/// A bare file name yields an empty path, so joins against it stay relative.
pub fn base_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or_else(|| Path::new(""))
}

/// Resolve `path` against the directory of `config_path`.
///
/// Absolute paths are returned unchanged.
pub fn join_relative(config_path: &Path, path: &str) -> String {
    if Path::new(path).is_absolute() {
        return path.to_string();
    }
    base_dir(config_path).join(path).to_string_lossy().into_owned()
}
