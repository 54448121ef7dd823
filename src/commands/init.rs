//! Init command implementation

use super::{Command, CommandContext};
use crate::constants;
use crate::git::{self, CommitOutcome, Logger};
use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Initialize-only workflow: create repository metadata, rename the default
/// branch to "main" and write a default `.gitignore`. Never pushes.
pub struct InitCommand;

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = Logger;

        if !ensure_repository(&context.cwd, &logger)? {
            logger.info("Repository already initialized");
            return Ok(());
        }

        // Seed an initial commit from whatever is already in the tree.
        // An empty tree is fine for init; the repository just stays at
        // zero commits.
        let message = context
            .commit_message
            .as_deref()
            .unwrap_or(constants::git::INITIAL_COMMIT_MSG);
        git::stage_all(&context.cwd)?;
        match git::commit_all(&context.cwd, message) {
            Ok(CommitOutcome::Committed) => logger.success("Created initial commit"),
            Ok(CommitOutcome::NothingToCommit) => {
                logger.warn("Working tree is empty - skipping initial commit");
            }
            Err(err) => logger.warn(&format!("Skipping initial commit: {err}")),
        }

        Ok(())
    }
}

/// Create repository metadata if the directory has none
///
/// Returns whether a repository was initialized. Shared with the
/// create-new-repo workflow, which needs the same preparation before it can
/// hand the directory to `gh repo create`.
pub fn ensure_repository(cwd: &Path, logger: &Logger) -> Result<bool> {
    if git::is_git_repo(cwd) {
        return Ok(false);
    }

    logger.info("Initializing git repository");
    git::init_repository(cwd)?;
    git::rename_branch(cwd, constants::git::DEFAULT_BRANCH)?;

    let gitignore = cwd.join(constants::git::GITIGNORE_FILE);
    if !gitignore.exists() {
        fs::write(&gitignore, constants::git::GITIGNORE_TEMPLATE)?;
        logger.info("Created .gitignore file");
    }

    Ok(true)
}
