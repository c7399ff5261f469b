//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! Available on all commands:
//! - `--config <path>`: Use a specific config file (`$GROVE_CONFIG` is also honored)
//! - `--verbose` / `-v`: Enable debug logging

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Grove - organize and navigate your local source repositories
#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the grove config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every repository under the development directory
    #[command(name = "list", alias = "ls")]
    List {
        /// Also print each repository's path
        #[arg(long)]
        full: bool,

        /// Emit machine-readable JSON
        #[arg(long, conflicts_with = "full")]
        json: bool,
    },

    /// Show details for a repository
    #[command(
        name = "info",
        long_about = "Show details for a repository.\n\n\
            The name may be fully qualified (github.com/acme/widgets), a full name \
            under the default service (acme/widgets), an alias, or an abbreviation \
            that fuzzy-matches exactly one repository (gh/ac/wid). With no name, the \
            repository containing the current directory is used."
    )]
    Info {
        /// Repository name, alias, or abbreviation; defaults to the current directory
        name: Option<String>,
    },

    /// Print (and create if needed) a scratchpad directory
    Scratch {
        /// Scratchpad name; defaults to the current week, e.g. 2026w35
        name: Option<String>,
    },

    /// Create a branch in a repository
    Branch {
        /// Name of the branch to create
        name: String,

        /// Repository to create the branch in; defaults to the current directory
        #[arg(long)]
        repo: Option<String>,

        /// Revision the branch starts from
        #[arg(long, default_value = "HEAD")]
        from: String,
    },

    /// Emit completion suggestions for in-progress input
    #[command(hide = true)]
    Complete {
        /// The partially typed input to complete
        filter: Option<String>,
    },

    /// Print the active configuration as TOML
    Config,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported by the completion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
