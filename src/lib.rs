//! Gitpush - A CLI tool that automates everyday Git push workflows

pub mod commands;
pub mod constants;
pub mod git;
pub mod github;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use github::GhCli;
