//! list command - Enumerate every repository under the development directory

use anyhow::Result;

use crate::core::Config;
use crate::resolver::Resolver;

/// Print every known repository, in enumeration order.
///
/// Defaults to qualified names only; `--full` appends paths and `--json`
/// emits a machine-readable array.
pub fn list(config: &Config, full: bool, json: bool) -> Result<()> {
    let resolver = Resolver::new(config);
    let repos = resolver.all()?;

    if json {
        let values: Vec<_> = repos
            .iter()
            .map(|r| {
                serde_json::json!({
                    "name": r.qualified_name(),
                    "service": r.service(),
                    "path": r.path(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    for repo in repos {
        if full {
            println!("{}\t{}", repo.qualified_name(), repo.path().display());
        } else {
            println!("{}", repo.qualified_name());
        }
    }

    Ok(())
}
