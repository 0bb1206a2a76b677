//! Resolve command implementation

use std::path::Path;

use artman_config::ArtifactLoader;

use crate::error::Result;

/// Print the effective configuration of `artifact` as pretty JSON.
pub fn run_resolve(config: &Path, artifact: &str) -> Result<()> {
    let resolved = ArtifactLoader::new().load(config, artifact)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
