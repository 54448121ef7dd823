//! Command implementations for the three workflows
//!
//! Each workflow is a struct implementing the [`Command`] trait and receives
//! a [`CommandContext`] with the invocation-wide parameters:
//!
//! - [`PushCommand`]: stage, optionally commit, push (the default)
//! - [`InitCommand`]: initialize a local repository, never pushes
//! - [`CreateCommand`]: create a GitHub repository via `gh` and push to it
//!
//! The workflows are mutually exclusive; exactly one executes per
//! invocation.

pub mod base;
pub mod create;
pub mod init;
pub mod push;

pub use base::{Command, CommandContext};
pub use create::CreateCommand;
pub use init::InitCommand;
pub use push::PushCommand;
