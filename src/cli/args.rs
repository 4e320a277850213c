// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::Language;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sc - Conventional commit composer
///
/// Running `sc` with no flags starts the interactive flow; passing
/// `--type` and `--message` commits directly from the command line.
#[derive(Parser, Debug)]
#[command(name = "sc")]
#[command(version)]
#[command(about = "Conventional commit composer with full customization", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to commit if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Commit flags usable without the explicit `commit` subcommand
    #[command(flatten)]
    pub commit: CommitArgs,

    /// Stage modified and deleted files before committing
    #[arg(short, long, global = true)]
    pub all: bool,

    /// Show the message without creating a commit
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The command to dispatch, defaulting to commit with the top-level
    /// flags.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Commit(self.commit.clone()))
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compose and create a commit (default command)
    Commit(CommitArgs),

    /// Validate an existing commit message
    Check(CheckArgs),

    /// Write a default configuration file
    Init(InitArgs),

    /// Manage git hooks
    Hooks(HooksArgs),

    /// Print version information
    Version,
}

/// Arguments for the commit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Commit type (feat, fix, docs, etc.)
    #[arg(short = 't', long)]
    pub r#type: Option<String>,

    /// Commit scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Commit message (short description)
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Commit body (longer description)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Mark as breaking change
    #[arg(long)]
    pub breaking: bool,

    /// Issue references (e.g., "fix #123")
    #[arg(short, long)]
    pub issues: Option<String>,

    /// Amend the previous commit
    #[arg(long)]
    pub amend: bool,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Commit message to validate
    #[arg(short, long)]
    pub message: Option<String>,

    /// Read the commit message from a file (e.g. .git/COMMIT_EDITMSG)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Suppress output, report through the exit code only
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,

    /// Language for the generated defaults
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Force overwrite existing hooks
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,
}
