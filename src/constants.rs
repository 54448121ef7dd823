//! Central constants for the gitpush application

/// Default values for Git operations
pub mod git {
    /// Default branch name used when the current branch cannot be determined
    pub const DEFAULT_BRANCH: &str = "main";

    /// Default remote name for push operations
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Default commit message for initial commits
    pub const INITIAL_COMMIT_MSG: &str = "Initial commit";

    /// Conventional ignore file name
    pub const GITIGNORE_FILE: &str = ".gitignore";

    /// Default `.gitignore` content written when initializing a repository
    /// that does not have one yet
    pub const GITIGNORE_TEMPLATE: &str = "\
# Build artifacts
target/
*.o
*.so

# Environment
env/
venv/
.env

# IDE
.vscode/
.idea/
*.swp
*.swo

# System
.DS_Store
Thumbs.db

# Project specific
*.log
*.tmp
*.bak
";
}

/// Default values for GitHub CLI operations
pub mod github {
    /// Program name of the GitHub CLI binary
    pub const GH_PROGRAM: &str = "gh";

    /// Host passed to the interactive login flow
    pub const GH_HOST: &str = "github.com";
}
