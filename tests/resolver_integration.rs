//! Integration tests for the resolution engine.
//!
//! These tests exercise the full resolution flow against real directory
//! trees: structural lookup, default-service fallback, fuzzy
//! disambiguation, enumeration invariants, and completion.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use grove::core::{Config, Service};
use grove::resolver::{Completer, Resolver};

// =============================================================================
// Test Fixtures
// =============================================================================

/// A development root populated with a multi-service repository tree.
struct DevTree {
    dir: TempDir,
}

impl DevTree {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        for repo in [
            "github.com/acme/widgets",
            "github.com/acme/widgets2",
            "github.com/sierrasoftworks/git-tool",
            "dev.azure.com/org/project/repo",
            "scratch/2026w01",
            "scratch/2026w02",
            // Top-level directory with no configured service.
            "files.local/stuff/things",
        ] {
            fs::create_dir_all(dir.path().join(repo)).unwrap();
        }

        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> Config {
        Config::new(
            self.path().to_path_buf(),
            vec![
                Service::new("github.com", "*/*"),
                Service::new("dev.azure.com", "*/*/*"),
            ],
        )
        .with_default_service("github.com")
        .with_alias("gt", "github.com/sierrasoftworks/git-tool")
    }
}

// =============================================================================
// Structural resolution
// =============================================================================

#[test]
fn qualified_resolve_returns_existing_repo() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let repo = resolver
        .resolve("github.com/acme/widgets")
        .unwrap()
        .unwrap();
    assert_eq!(repo.full_name(), "acme/widgets");
    assert_eq!(
        repo.path(),
        tree.path().join("github.com/acme/widgets").as_path()
    );
    assert!(repo.path().is_dir());
}

#[test]
fn too_few_segments_is_not_found() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    assert!(resolver.resolve("github.com/acme").unwrap().is_none());
    assert!(resolver
        .resolve("dev.azure.com/org/project")
        .unwrap()
        .is_none());
}

#[test]
fn default_service_fallback_resolves_unqualified_names() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let qualified = resolver
        .resolve("github.com/acme/widgets")
        .unwrap()
        .unwrap();
    let fallback = resolver.resolve("acme/widgets").unwrap().unwrap();
    assert_eq!(qualified, fallback);
}

#[test]
fn three_segment_services_resolve_deeper_names() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let repo = resolver
        .resolve("dev.azure.com/org/project/repo")
        .unwrap()
        .unwrap();
    assert_eq!(repo.full_name(), "org/project/repo");
    assert_eq!(repo.service(), "dev.azure.com");
}

// =============================================================================
// Fuzzy resolution and aliases
// =============================================================================

#[test]
fn alias_resolution_is_idempotent_with_direct_resolution() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let direct = resolver
        .resolve_best("github.com/sierrasoftworks/git-tool")
        .unwrap()
        .unwrap();
    let aliased = resolver.resolve_best("gt").unwrap().unwrap();
    assert_eq!(direct, aliased);
}

#[test]
fn ambiguous_fuzzy_match_is_not_found() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    // widgets and widgets2 both satisfy the filter.
    assert!(resolver.resolve_best("widgets").unwrap().is_none());
}

#[test]
fn unique_fuzzy_match_resolves() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let repo = resolver.resolve_best("gh/sierra/git").unwrap().unwrap();
    assert_eq!(repo.full_name(), "sierrasoftworks/git-tool");
}

#[test]
fn fuzzy_matching_is_case_insensitive() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let repo = resolver.resolve_best("GH/SIERRA/GIT").unwrap().unwrap();
    assert_eq!(repo.full_name(), "sierrasoftworks/git-tool");
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn enumeration_upholds_invariants() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let repos = resolver.all().unwrap();
    assert_eq!(repos.len(), 4);

    for repo in &repos {
        // Existence invariant.
        assert!(repo.path().is_dir(), "{} must exist", repo.qualified_name());

        // Segment-count invariant.
        let service = config.get_service(repo.service()).unwrap();
        assert_eq!(
            repo.full_name().split('/').count(),
            service.pattern_segments()
        );

        // The scratch directory and unknown services are never enumerated.
        assert_ne!(repo.service(), "scratch");
        assert_ne!(repo.service(), "files.local");
    }
}

#[test]
fn enumeration_is_deterministic_across_calls() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    assert_eq!(resolver.all().unwrap(), resolver.all().unwrap());
}

#[test]
fn scratchpads_are_listed_without_validity_filtering() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let mut names: Vec<String> = resolver
        .scratchpads()
        .unwrap()
        .into_iter()
        .map(|p| p.name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["2026w01", "2026w02"]);
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn completion_suggests_matching_repositories() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let mut out = Vec::new();
    let mut completer = Completer::new(&resolver, "gh/acme", &mut out);
    completer.repos().unwrap();

    let mut lines: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    assert_eq!(
        lines,
        vec!["github.com/acme/widgets", "github.com/acme/widgets2"]
    );
}

#[test]
fn completion_quotes_values_with_whitespace() {
    let tree = DevTree::new();
    let config = tree.config();
    let resolver = Resolver::new(&config);

    let mut out = Vec::new();
    let mut completer = Completer::new(&resolver, "", &mut out);
    completer.fixed(&["no-space", "has space"]).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "no-space\n'has space'\n");
}
