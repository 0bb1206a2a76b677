//! Command implementations for artman-cli

pub mod check;
pub mod resolve;
pub mod user_config;

pub use check::run_check;
pub use resolve::run_resolve;
pub use user_config::run_user_config;
