//! cli
//!
//! Command-line interface layer for Grove.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and construct the resolver's collaborators
//! - Delegate to command handlers
//!
//! The CLI layer is thin: name resolution lives in [`crate::resolver`] and
//! repository actions in [`crate::tasks`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

use crate::core::Config;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    commands::dispatch(cli.command, &config)
}

/// Install the global tracing subscriber.
///
/// `--verbose` forces debug-level output; otherwise `RUST_LOG` is honored
/// with a quiet default. Diagnostics go to stderr so they never mix with
/// completion output.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("grove=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grove=warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
