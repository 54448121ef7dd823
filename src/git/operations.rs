//! Git operations for the push, init and create workflows
//!
//! Every function shells out to the system `git` binary against an explicit
//! repository path. Non-zero exits are turned into errors carrying the
//! command's stderr; the two spots where git legitimately reports an empty
//! working tree surface that as an outcome value instead so callers can
//! decide whether it is benign.

use crate::utils::exit_codes::describe_exit_status;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Outcome of a commit attempt
#[derive(Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created
    Committed,
    /// The working tree had nothing to commit
    NothingToCommit,
}

/// Outcome of a push attempt
#[derive(Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// The remote accepted the push
    Pushed,
    /// Nothing needed to be pushed
    NothingToPush,
}

/// Marker git prints when a commit or push finds an empty working tree
const NOTHING_TO_COMMIT: &str = "nothing to commit";

/// Check whether a directory already contains repository metadata
pub fn is_git_repo(repo_path: &Path) -> bool {
    repo_path.join(".git").exists()
}

/// Initialize a new git repository
pub fn init_repository(repo_path: &Path) -> Result<()> {
    let output = run_git(repo_path, &["init"])?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to initialize repository: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Rename the current branch, e.g. to "main" right after init
pub fn rename_branch(repo_path: &Path, name: &str) -> Result<()> {
    let output = run_git(repo_path, &["branch", "-M", name])?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to rename branch to '{}': {}",
            name,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Stage all changes in the working tree
pub fn stage_all(repo_path: &Path) -> Result<()> {
    let output = run_git(repo_path, &["add", "."])?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to stage changes: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Commit staged changes with a message
///
/// An empty working tree is not an error here; git reports it on stdout with
/// exit code 1 and callers decide whether that is benign for their workflow.
pub fn commit_all(repo_path: &Path, message: &str) -> Result<CommitOutcome> {
    let output = run_git(repo_path, &["commit", "-m", message])?;

    if output.status.success() {
        return Ok(CommitOutcome::Committed);
    }

    if reports_nothing_to_commit(&output.stdout, &output.stderr) {
        return Ok(CommitOutcome::NothingToCommit);
    }

    anyhow::bail!(
        "Failed to commit changes ({}): {}",
        describe_exit_status(&output.status),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Count the commits reachable from HEAD
///
/// A repository without any commit has no HEAD yet, which git reports as a
/// failure; that case is a count of zero, not an error.
pub fn commit_count(repo_path: &Path) -> Result<u64> {
    let output = run_git(repo_path, &["rev-list", "--count", "HEAD"])?;

    if !output.status.success() {
        return Ok(0);
    }

    let count = String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse::<u64>()
        .unwrap_or(0);
    Ok(count)
}

/// Get the currently checked-out branch, falling back to the default
pub fn current_branch(repo_path: &Path) -> Result<String> {
    let output = run_git(repo_path, &["branch", "--show-current"])?;

    if output.status.success() {
        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !branch.is_empty() {
            return Ok(branch);
        }
    }

    // Detached HEAD or unborn branch
    Ok(crate::constants::git::DEFAULT_BRANCH.to_string())
}

/// Push to a remote branch, optionally with lease-protected force and tags
pub fn push(
    repo_path: &Path,
    remote: &str,
    branch: &str,
    force: bool,
    tags: bool,
) -> Result<PushOutcome> {
    let mut args = vec!["push"];
    if force {
        args.push("--force-with-lease");
    }
    if tags {
        args.push("--tags");
    }
    args.push(remote);
    args.push(branch);

    let output = run_git(repo_path, &args)?;

    if output.status.success() {
        return Ok(PushOutcome::Pushed);
    }

    if reports_nothing_to_commit(&output.stdout, &output.stderr) {
        return Ok(PushOutcome::NothingToPush);
    }

    anyhow::bail!(
        "Failed to push to {}/{} ({}): {}",
        remote,
        branch,
        describe_exit_status(&output.status),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn run_git(repo_path: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))
}

/// Classify a failed invocation whose only complaint is an empty working
/// tree; git prints the marker on stdout for commits, and the check covers
/// stderr as well for tools that report it there
fn reports_nothing_to_commit(stdout: &[u8], stderr: &[u8]) -> bool {
    String::from_utf8_lossy(stdout).contains(NOTHING_TO_COMMIT)
        || String::from_utf8_lossy(stderr).contains(NOTHING_TO_COMMIT)
}
