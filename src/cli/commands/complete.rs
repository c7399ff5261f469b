//! complete command - Emit dynamic completion suggestions
//!
//! This powers the shell integration installed by the `completion` command:
//! the shell calls back into `gv complete <input>` and offers the emitted
//! lines as suggestions.

use anyhow::Result;

use crate::core::Config;
use crate::resolver::{Completer, Resolver};

/// Subcommand names offered alongside repository suggestions.
const COMMANDS: &[&str] = &["list", "info", "scratch", "branch", "config", "completion"];

/// Emit every candidate matching the in-progress input to stdout.
pub fn complete(config: &Config, filter: Option<&str>) -> Result<()> {
    let resolver = Resolver::new(config);
    let stdout = std::io::stdout();
    let mut completer = Completer::new(&resolver, filter.unwrap_or(""), stdout.lock());

    completer.fixed(COMMANDS)?;
    completer.repos()?;
    completer.scratchpads()?;

    Ok(())
}
