//! branch command - Create a branch in a resolved repository

use anyhow::{bail, Result};

use crate::core::Config;
use crate::resolver::Resolver;
use crate::tasks::{NewBranch, Task};

/// Create `name` at `from` in the repository resolved from `repo`.
///
/// With no `--repo`, the repository containing the current directory is
/// used. A branch that already exists is left alone and the command
/// succeeds.
pub fn branch(config: &Config, name: &str, repo: Option<&str>, from: &str) -> Result<()> {
    let resolver = Resolver::new(config);

    let query = repo.unwrap_or("");
    let Some(target) = resolver.resolve_best(query)? else {
        if query.is_empty() {
            bail!("the current directory is not within a known repository");
        }
        bail!("no repository matched '{}' unambiguously", query);
    };

    NewBranch::new(name).from_ref(from).apply_repo(&target)?;

    println!("{}: created branch '{}'", target.qualified_name(), name);
    Ok(())
}
