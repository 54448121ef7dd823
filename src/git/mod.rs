//! Git operations using system git commands for maximum compatibility
//!
//! This module is organized into sub-modules for different concerns:
//!
//! - [`operations`]: The individual git invocations used by the workflows
//!   (init, branch rename, staging, committing, pushing, state queries)
//! - [`common`]: Shared utilities and helpers (`Logger` for status output)
//!
//! All functions operate on an explicit repository path and shell out to the
//! system `git` binary; none of them hold state of their own.

pub mod common;
pub mod operations;

// Re-export all public functions to keep call sites short
pub use common::Logger;
pub use operations::{
    CommitOutcome, PushOutcome, commit_all, commit_count, current_branch, init_repository,
    is_git_repo, push, rename_branch, stage_all,
};
