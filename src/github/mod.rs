//! GitHub CLI integration module
//!
//! Repository hosting operations go through the system `gh` binary rather
//! than the REST API, so authentication and credential storage stay with the
//! GitHub CLI. [`cli::GhCli`] wraps the handful of `gh` invocations the
//! create-new-repo workflow needs: presence probe, auth status, interactive
//! login, repository creation and the URL query.

pub mod cli;

pub use cli::GhCli;
