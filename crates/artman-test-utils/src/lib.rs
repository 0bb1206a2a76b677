//! Shared test utilities for the artman workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`config`]: [`TestConfig`] builder for artman YAML fixtures on disk

pub mod config;

pub use config::TestConfig;
