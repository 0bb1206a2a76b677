//! Filesystem primitives for the artman config loader
//!
//! Provides text reading, format-detecting document loading and the path
//! helpers used to resolve config-relative fields.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{base_dir, expand_home, has_parent_traversal, join_relative};
