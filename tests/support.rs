//! Common test support utilities and fixtures
//!
//! Shared functionality to reduce duplication across the integration tests.
//! Scratch repositories get a local identity so commits work on machines
//! without a global git configuration.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};
use tempfile::TempDir;

/// Result of running the CLI binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the gitpush CLI with given arguments
pub fn run_cli(args: &[&str], cwd: Option<&Path>) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--"]);
    cmd.args(args);

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute cargo run");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run git in a directory and return trimmed stdout
pub fn git_stdout(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("Failed to execute git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Give a repository a local commit identity
pub fn configure_identity(path: &Path) {
    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(path)
        .output()
        .expect("Failed to configure user.name");

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(path)
        .output()
        .expect("Failed to configure user.email");
}

/// Initialize a git repository with an identity and one committed file
pub fn scratch_repo(path: &Path) {
    fs::create_dir_all(path).expect("Failed to create repo directory");

    Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(path)
        .output()
        .expect("Failed to execute git init");

    configure_identity(path);

    fs::write(path.join("README.md"), "# Test Repository").expect("Failed to write README");

    Command::new("git")
        .args(["add", "."])
        .current_dir(path)
        .output()
        .expect("Failed to stage files");

    Command::new("git")
        .args(["commit", "-m", "Initial commit"])
        .current_dir(path)
        .output()
        .expect("Failed to commit");
}

/// Create a bare repository next to `repo` and wire it up as a remote
///
/// Pushing to a local bare remote exercises the full push path without any
/// network access.
pub fn add_bare_remote(repo: &Path, remote_name: &str) -> PathBuf {
    let bare = repo
        .parent()
        .expect("Repo has no parent directory")
        .join(format!("{remote_name}-remote.git"));

    Command::new("git")
        .args(["init", "--bare"])
        .arg(&bare)
        .output()
        .expect("Failed to create bare repository");

    Command::new("git")
        .args(["remote", "add", remote_name])
        .arg(&bare)
        .current_dir(repo)
        .output()
        .expect("Failed to add remote");

    bare
}

/// Export a commit identity through the environment
///
/// Lets commands that initialize brand-new repositories commit without any
/// git configuration present. Callers must hold the `serial` lock since
/// process environment is shared.
pub fn set_commit_identity_env() {
    // SAFETY: callers are serialized via serial_test
    unsafe {
        env::set_var("GIT_AUTHOR_NAME", "Test User");
        env::set_var("GIT_AUTHOR_EMAIL", "test@example.com");
        env::set_var("GIT_COMMITTER_NAME", "Test User");
        env::set_var("GIT_COMMITTER_EMAIL", "test@example.com");
    }
}

/// Create a script file with given content and make it executable
#[cfg(unix)]
pub fn create_executable_script(path: &Path, content: &str) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, content)?;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

/// Create a script file with given content (Windows compatible)
#[cfg(not(unix))]
pub fn create_executable_script(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

/// Create a temporary directory for a test
pub fn workspace() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}
