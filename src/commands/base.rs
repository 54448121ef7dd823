//! Base types and traits for the command pattern

use anyhow::Result;
use std::path::PathBuf;

/// Context passed to all commands containing shared invocation parameters
#[derive(Clone)]
pub struct CommandContext {
    /// Working directory holding the repository the commands operate on
    pub cwd: PathBuf,
    /// Commit message, when one was supplied on the command line
    pub commit_message: Option<String>,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
