//! CLI argument parsing using clap derive

use std::path::PathBuf;

use artman_config::user_config::DEFAULT_USER_CONFIG_PATH;
use clap::{Parser, Subcommand};

/// Inspect artman artifact configurations
#[derive(Parser, Debug)]
#[command(name = "artman-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective configuration of one artifact as JSON
    ///
    /// Examples:
    ///   artman-config resolve artman_pubsub.yaml python_gapic
    Resolve {
        /// Path to the artman YAML document
        config: PathBuf,

        /// Name of the artifact to resolve
        artifact: String,
    },

    /// Resolve every artifact of a document and report which ones fail
    Check {
        /// Path to the artman YAML document
        config: PathBuf,
    },

    /// Print the user preferences as JSON (credentials omitted)
    UserConfig {
        /// Path to the preferences file
        #[arg(long, default_value = DEFAULT_USER_CONFIG_PATH)]
        path: String,
    },
}
