//! info command - Show details for a resolved repository

use anyhow::{bail, Result};

use crate::core::Config;
use crate::resolver::Resolver;

/// Resolve `name` and print the repository's details.
///
/// Exits with an error when nothing (or more than one thing) matches; the
/// message distinguishes this from operational failures, which surface with
/// the underlying cause.
pub fn info(config: &Config, name: Option<&str>) -> Result<()> {
    let resolver = Resolver::new(config);

    let name = name.unwrap_or("");
    let Some(repo) = resolver.resolve_best(name)? else {
        if name.is_empty() {
            bail!("the current directory is not within a known repository");
        }
        bail!("no repository matched '{}' unambiguously", name);
    };

    println!("Name: {}", repo.qualified_name());
    println!("Service: {}", repo.service());
    println!("Path: {}", repo.path().display());

    if let Some(service) = config.get_service(repo.service()) {
        if let Some(url) = service.website(&repo) {
            println!("Website: {}", url);
        }
        if let Some(url) = service.http_url(&repo) {
            println!("HTTP: {}", url);
        }
        if let Some(url) = service.git_url(&repo) {
            println!("Git: {}", url);
        }
    }

    Ok(())
}
