//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docindex",
    version,
    about = "Generate a Markdown README index from a docs tree",
    long_about = "docindex — walk the docs directory, list every file grouped by folder in sorted order, and rewrite README.md.\n\nRunning without a subcommand is the same as `docindex generate`.\nConfiguration precedence: CLI > docindex.toml > defaults.",
    after_help = "Examples:\n  docindex\n  docindex generate --check\n  docindex generate --dry-run --docs notes\n  docindex generate --output json"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current docindex version."
    )]
    Version,
    /// Regenerate the README index
    #[command(
        about = "Regenerate the README index",
        long_about = "Render the docs tree and fully overwrite the README. With --check or --dry-run nothing is written.",
        after_help = "Examples:\n  docindex generate\n  docindex generate --repo-url https://github.com/owner/repo --branch main\n  docindex generate --check"
    )]
    Generate(GenerateArgs),
}

#[derive(Args, Default)]
/// Options for `docindex generate`.
pub struct GenerateArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Docs directory relative to the root (default: docs)")]
    pub docs: Option<String>,
    #[arg(long, help = "README path relative to the root (default: README.md)")]
    pub readme: Option<String>,
    #[arg(long, help = "Repository base URL used as link prefix")]
    pub repo_url: Option<String>,
    #[arg(long, help = "Branch used in links (default: main)")]
    pub branch: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if the README is stale (implies no write)")]
    pub check: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Print the rendered index instead of writing it")]
    pub dry_run: bool,
}

impl From<GenerateArgs> for crate::config::CliOverrides {
    fn from(a: GenerateArgs) -> Self {
        crate::config::CliOverrides {
            repo_root: a.repo_root,
            docs: a.docs,
            readme: a.readme,
            repo_url: a.repo_url,
            branch: a.branch,
            output: a.output,
            check: a.check,
            dry_run: a.dry_run,
        }
    }
}
