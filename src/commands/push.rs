//! Standard push command implementation

use super::{Command, CommandContext};
use crate::git::{self, CommitOutcome, Logger, PushOutcome};
use anyhow::Result;
use async_trait::async_trait;

/// The default workflow: stage everything, commit when a message was given,
/// push to the remote
pub struct PushCommand {
    /// Branch to push; the current branch when not given
    pub branch: Option<String>,
    /// Remote to push to
    pub remote: String,
    /// Push with `--force-with-lease`
    pub force: bool,
    /// Include tags in the push
    pub tags: bool,
}

#[async_trait]
impl Command for PushCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = Logger;

        git::stage_all(&context.cwd)?;

        match &context.commit_message {
            Some(message) => {
                logger.info(&format!("Committing: '{message}'"));
                if git::commit_all(&context.cwd, message)? == CommitOutcome::NothingToCommit {
                    logger.warn("Nothing to commit, working tree clean");
                }
            }
            None => logger.info("No commit message provided - skipping commit"),
        }

        let branch = match &self.branch {
            Some(branch) => branch.clone(),
            None => git::current_branch(&context.cwd)?,
        };

        logger.info(&format!("Pushing to {}/{}", self.remote, branch));
        match git::push(&context.cwd, &self.remote, &branch, self.force, self.tags)? {
            PushOutcome::Pushed => logger.success("Successfully pushed changes"),
            PushOutcome::NothingToPush => logger.warn("Nothing to push"),
        }

        Ok(())
    }
}
