//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler is thin glue: it resolves names through the
//! [`crate::resolver`], runs tasks from [`crate::tasks`], and formats
//! output. All decision logic lives in the resolver.

mod branch;
mod complete;
mod completion;
mod config_cmd;
mod info;
mod list;
mod scratch;

pub use branch::branch;
pub use complete::complete;
pub use completion::completion;
pub use config_cmd::config;
pub use info::info;
pub use list::list;
pub use scratch::scratch;

use anyhow::Result;

use crate::cli::args::Command;
use crate::core::Config;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::List { full, json } => list::list(config, full, json),
        Command::Info { name } => info::info(config, name.as_deref()),
        Command::Scratch { name } => scratch::scratch(config, name.as_deref()),
        Command::Branch { name, repo, from } => {
            branch::branch(config, &name, repo.as_deref(), &from)
        }
        Command::Complete { filter } => complete::complete(config, filter.as_deref()),
        Command::Config => config_cmd::config(config),
        Command::Completion { shell } => completion::completion(shell),
    }
}
