//! User-config command implementation

use artman_config::ArtifactLoader;

use crate::error::Result;

/// Print the user preferences at `path` as pretty JSON.
pub fn run_user_config(path: &str) -> Result<()> {
    let preferences = ArtifactLoader::new().load_user_preferences(path)?;
    println!("{}", serde_json::to_string_pretty(&preferences)?);
    Ok(())
}
