//! Wrapper around the GitHub CLI (`gh`) binary

use crate::constants::github::GH_HOST;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle to the GitHub CLI for a single working directory
///
/// The program name is configurable so tests can point at a binary that is
/// guaranteed to be absent.
pub struct GhCli {
    program: String,
    cwd: PathBuf,
}

/// Subset of `gh repo view --json url` output
#[derive(Deserialize)]
struct RepoView {
    url: String,
}

impl GhCli {
    pub fn new(program: &str, cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Check whether the GitHub CLI can be executed at all
    pub fn is_installed(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .current_dir(&self.cwd)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Check whether the user is authenticated with the GitHub CLI
    pub fn is_authenticated(&self) -> bool {
        Command::new(&self.program)
            .args(["auth", "status"])
            .current_dir(&self.cwd)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Run the interactive browser-based login flow
    ///
    /// Stdio is inherited so gh can prompt and open the browser.
    pub fn login(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .args(["auth", "login", "--web", "-h", GH_HOST])
            .current_dir(&self.cwd)
            .status()
            .context("Failed to execute gh auth login")?;

        if !status.success() {
            anyhow::bail!("GitHub authentication failed");
        }

        Ok(())
    }

    /// Create a remote repository wired as `origin` and push the current
    /// state to it in one step
    pub fn create_repository(
        &self,
        name: &str,
        private: bool,
        description: Option<&str>,
    ) -> Result<()> {
        let args = create_repo_args(name, private, description);

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.cwd)
            .output()
            .context("Failed to execute gh repo create")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("already exists") {
                anyhow::bail!(
                    "Repository name '{}' already exists on this account; choose a different name",
                    name
                );
            }
            anyhow::bail!("Failed to create repository: {}", stderr);
        }

        Ok(())
    }

    /// Query the URL of the repository the working directory belongs to
    pub fn repository_url(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .args(["repo", "view", "--json", "url"])
            .current_dir(&self.cwd)
            .output()
            .context("Failed to execute gh repo view")?;

        if !output.status.success() {
            anyhow::bail!(
                "Failed to query repository URL: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        let view: RepoView = serde_json::from_slice(&output.stdout)
            .context("Failed to parse gh repo view output")?;
        Ok(view.url)
    }
}

/// Build the argument list for `gh repo create`
///
/// Visibility is always passed explicitly: `--private` when requested and
/// `--public` otherwise, never both.
fn create_repo_args(name: &str, private: bool, description: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "repo".to_string(),
        "create".to_string(),
        name.to_string(),
        if private { "--private" } else { "--public" }.to_string(),
        "--source=.".to_string(),
        "--remote=origin".to_string(),
        "--push".to_string(),
    ];

    if let Some(description) = description {
        args.push("--description".to_string());
        args.push(description.to_string());
    }

    args
}

/// Manual installation instructions for the current platform
///
/// Automatic installation is out of scope; the user gets pointed at the
/// package manager for their OS instead.
pub fn install_instructions() -> Vec<&'static str> {
    let mut lines = vec!["GitHub CLI (gh) is not installed", "Please install it first:"];

    if cfg!(target_os = "macos") {
        lines.push("  Mac (Homebrew): brew install gh");
    } else if cfg!(target_os = "windows") {
        lines.push("  Windows (Winget): winget install --id GitHub.cli");
    } else {
        lines.push("  Linux: see https://github.com/cli/cli#installation");
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_repo_args_public_by_default() {
        let args = create_repo_args("demo", false, None);
        assert!(args.contains(&"--public".to_string()));
        assert!(!args.contains(&"--private".to_string()));
    }

    #[test]
    fn test_create_repo_args_private() {
        let args = create_repo_args("demo", true, None);
        assert!(args.contains(&"--private".to_string()));
        assert!(!args.contains(&"--public".to_string()));
    }

    #[test]
    fn test_create_repo_args_wires_origin_and_pushes() {
        let args = create_repo_args("demo", false, None);
        assert_eq!(args[..3], ["repo", "create", "demo"].map(String::from));
        assert!(args.contains(&"--source=.".to_string()));
        assert!(args.contains(&"--remote=origin".to_string()));
        assert!(args.contains(&"--push".to_string()));
    }

    #[test]
    fn test_create_repo_args_description() {
        let args = create_repo_args("demo", true, Some("test"));
        let pos = args.iter().position(|a| a == "--description").unwrap();
        assert_eq!(args[pos + 1], "test");

        let args = create_repo_args("demo", true, None);
        assert!(!args.contains(&"--description".to_string()));
    }

    #[test]
    fn test_missing_binary_is_not_installed() {
        let gh = GhCli::new("gh-definitely-not-a-real-binary", Path::new("."));
        assert!(!gh.is_installed());
        assert!(!gh.is_authenticated());
    }

    #[test]
    fn test_install_instructions_mention_a_package_manager() {
        let lines = install_instructions();
        assert!(lines[0].contains("not installed"));
        assert!(lines.len() >= 3);
    }
}
