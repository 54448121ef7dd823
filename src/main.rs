use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use gitpush::commands::{Command, CommandContext, CreateCommand, InitCommand, PushCommand};
use gitpush::constants;
use std::{env, io};

#[derive(Parser)]
#[command(name = "gitpush")]
#[command(about = "A supercharged git push tool with GitHub repo creation")]
#[command(version)]
#[command(after_help = "Examples:
  Standard push:         gitpush \"Commit message\"
  Create new repo:       gitpush \"Initial commit\" --new-repo project-name
  Private repository:    gitpush --new-repo private-project --private
  Force push:            gitpush \"Fix critical bug\" --force
")]
struct Cli {
    /// Commit message
    commit: Option<String>,

    /// Branch name (default: the currently checked-out branch)
    branch: Option<String>,

    /// Remote name
    #[arg(default_value_t = constants::git::DEFAULT_REMOTE.to_string())]
    remote: String,

    /// Force push with --force-with-lease
    #[arg(long)]
    force: bool,

    /// Push tags
    #[arg(long)]
    tags: bool,

    /// Initialize git repo
    #[arg(long, conflicts_with = "new_repo")]
    init: bool,

    /// Create new GitHub repository
    #[arg(long, value_name = "NAME")]
    new_repo: Option<String>,

    /// Make repository private
    #[arg(long)]
    private: bool,

    /// Repository description
    #[arg(long, value_name = "TEXT")]
    description: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "gitpush", &mut io::stdout());
        return Ok(());
    }

    let context = CommandContext {
        cwd: env::current_dir()?,
        commit_message: cli.commit,
    };

    if let Some(name) = cli.new_repo {
        CreateCommand {
            name,
            private: cli.private,
            description: cli.description,
            gh_program: constants::github::GH_PROGRAM.to_string(),
        }
        .execute(&context)
        .await?;
    } else if cli.init {
        InitCommand.execute(&context).await?;
    } else {
        PushCommand {
            branch: cli.branch,
            remote: cli.remote,
            force: cli.force,
            tags: cli.tags,
        }
        .execute(&context)
        .await?;
    }

    Ok(())
}
