//! Plain text I/O with path-carrying errors

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
