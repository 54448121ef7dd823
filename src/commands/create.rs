//! Create-new-repo command implementation

use super::init::ensure_repository;
use super::{Command, CommandContext};
use crate::constants;
use crate::git::{self, CommitOutcome, Logger};
use crate::github::{GhCli, cli::install_instructions};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Create a GitHub repository through the GitHub CLI and push the current
/// state to it
pub struct CreateCommand {
    /// Name of the repository to create
    pub name: String,
    /// Create the repository as private instead of public
    pub private: bool,
    /// Optional repository description
    pub description: Option<String>,
    /// Program name of the GitHub CLI binary
    pub gh_program: String,
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = Logger;
        let gh = GhCli::new(&self.gh_program, &context.cwd);

        logger.info(&format!("Creating repository: {}", self.name));

        if !gh.is_installed() {
            for line in install_instructions() {
                logger.error(line);
            }
            anyhow::bail!("GitHub CLI (gh) is not installed");
        }

        if !gh.is_authenticated() {
            logger.info("GitHub authentication required");
            logger.info("This will open your browser for secure login");
            gh.login()?;
        }

        ensure_repository(&context.cwd, &logger)?;

        let message = context
            .commit_message
            .as_deref()
            .unwrap_or(constants::git::INITIAL_COMMIT_MSG);
        if !ensure_initial_commit(&context.cwd, message, &logger)? {
            logger.info("Using existing commits");
        }

        logger.info("Creating repository and pushing code...");
        gh.create_repository(&self.name, self.private, self.description.as_deref())?;

        let url = gh.repository_url()?;
        logger.success(&format!("Successfully created repository: {url}"));

        Ok(())
    }
}

/// Make sure the repository has at least one commit to push
///
/// Returns whether a commit was created. Unlike the push workflow, an empty
/// working tree is fatal here: `gh repo create --push` has nothing to send.
pub fn ensure_initial_commit(cwd: &Path, message: &str, logger: &Logger) -> Result<bool> {
    if git::commit_count(cwd)? > 0 {
        return Ok(false);
    }

    logger.info("Creating initial commit");
    git::stage_all(cwd)?;
    match git::commit_all(cwd, message)? {
        CommitOutcome::Committed => Ok(true),
        CommitOutcome::NothingToCommit => anyhow::bail!(
            "Nothing to commit: add files to the working tree before creating a repository"
        ),
    }
}
