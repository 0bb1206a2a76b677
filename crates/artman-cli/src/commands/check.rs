//! Check command implementation

use std::path::Path;

use artman_config::ArtifactLoader;
use colored::Colorize;

use crate::error::{CliError, Result};

/// Validate the document, then try to resolve every artifact in it.
pub fn run_check(config: &Path) -> Result<()> {
    println!(
        "{} Checking {}...",
        "=>".blue().bold(),
        config.display()
    );

    let loader = ArtifactLoader::new();
    let document = loader.read_document(config)?;

    let mut failures = 0usize;
    for name in document.artifact_names() {
        match loader.resolve(&document, name) {
            Ok(_) => println!("   {} {}", "OK".green().bold(), name),
            Err(e) => {
                failures += 1;
                println!("   {} {}: {}", "FAIL".red().bold(), name, e);
            }
        }
    }

    if failures > 0 {
        return Err(CliError::user(format!(
            "{failures} of {} artifacts failed to resolve",
            document.artifacts.len()
        )));
    }

    println!(
        "{} {} artifacts resolved",
        "OK".green().bold(),
        document.artifacts.len()
    );
    Ok(())
}
