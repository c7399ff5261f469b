//! core::types
//!
//! Domain entities for the repository resolution engine.
//!
//! # Types
//!
//! - [`Service`] - A configured hosting service with a directory naming pattern
//! - [`Repo`] - A repository resolved to a concrete location on disk
//! - [`Scratchpad`] - An ad-hoc working directory under the scratch root
//! - [`Target`] - Common view over [`Repo`] and [`Scratchpad`] for tasks
//!
//! # Validity
//!
//! A [`Repo`] is only handed out by the resolver when its path exists on
//! disk; construction here does not verify that. [`Scratchpad`]s carry no
//! existence guarantee at all, supporting create-on-demand flows.
//!
//! # Examples
//!
//! ```
//! use grove::core::types::{Repo, Service};
//! use std::path::PathBuf;
//!
//! let service = Service::new("github.com", "*/*");
//! assert_eq!(service.pattern_segments(), 2);
//!
//! let repo = Repo::new("github.com", "acme/widgets", PathBuf::from("/dev/github.com/acme/widgets"));
//! assert_eq!(repo.qualified_name(), "github.com/acme/widgets");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A configured hosting service.
///
/// Each service owns a top-level directory under the development root named
/// after its `domain`, and lays repositories out beneath it according to
/// `pattern` - a slash-separated glob with a fixed segment count, such as
/// `*/*` for `owner/repo` layouts.
///
/// The optional URL templates accept `{domain}` and `{repo}` placeholders
/// and are rendered for display by the `info` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    domain: String,
    pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    http_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    git_url: Option<String>,
}

impl Service {
    /// Create a service with a domain and directory pattern.
    pub fn new(domain: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            pattern: pattern.into(),
            website: None,
            http_url: None,
            git_url: None,
        }
    }

    /// Attach URL templates to this service.
    pub fn with_urls(
        mut self,
        website: Option<String>,
        http_url: Option<String>,
        git_url: Option<String>,
    ) -> Self {
        self.website = website;
        self.http_url = http_url;
        self.git_url = git_url;
        self
    }

    /// The unique domain identifying this service, e.g. `github.com`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The slash-separated directory glob, e.g. `*/*`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of slash-separated segments in the directory pattern.
    ///
    /// Every repository under this service has a `full_name` with exactly
    /// this many segments.
    pub fn pattern_segments(&self) -> usize {
        self.pattern.split('/').filter(|s| !s.is_empty()).count()
    }

    /// Render the website URL for a repository, if a template is configured.
    pub fn website(&self, repo: &Repo) -> Option<String> {
        self.website.as_deref().map(|t| self.render(t, repo))
    }

    /// Render the HTTPS clone URL for a repository, if a template is configured.
    pub fn http_url(&self, repo: &Repo) -> Option<String> {
        self.http_url.as_deref().map(|t| self.render(t, repo))
    }

    /// Render the SSH clone URL for a repository, if a template is configured.
    pub fn git_url(&self, repo: &Repo) -> Option<String> {
        self.git_url.as_deref().map(|t| self.render(t, repo))
    }

    fn render(&self, template: &str, repo: &Repo) -> String {
        template
            .replace("{domain}", &self.domain)
            .replace("{repo}", repo.full_name())
    }
}

/// A repository resolved to a location on disk.
///
/// `full_name` is the repository's path relative to its service's directory,
/// always slash-separated regardless of platform, with exactly as many
/// segments as the service's pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    service: String,
    full_name: String,
    path: PathBuf,
}

impl Repo {
    /// Create a repository belonging to the service identified by `service`.
    pub fn new(service: impl Into<String>, full_name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            service: service.into(),
            full_name: full_name.into(),
            path,
        }
    }

    /// Domain of the owning service.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Slash-separated name relative to the service directory, e.g. `acme/widgets`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Absolute location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The human-facing name combining service domain and full name.
    ///
    /// This is the form matched against user input during fuzzy resolution
    /// and emitted as a completion suggestion.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.service, self.full_name)
    }

    /// Whether the repository directory currently exists.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}

/// An ad-hoc working directory under the scratch root.
///
/// Scratchpads are not tied to any service's naming convention and may be
/// constructed for directories that do not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scratchpad {
    name: String,
    path: PathBuf,
}

impl Scratchpad {
    /// Create a scratchpad with the given directory name.
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// Directory name under the scratch root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location on disk (not necessarily existing).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the scratchpad directory currently exists.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}

/// Common view over resolved targets, consumed by tasks.
pub trait Target {
    /// Display name for the target.
    fn name(&self) -> &str;

    /// Location on disk.
    fn path(&self) -> &Path;
}

impl Target for Repo {
    fn name(&self) -> &str {
        self.full_name()
    }

    fn path(&self) -> &Path {
        Repo::path(self)
    }
}

impl Target for Scratchpad {
    fn name(&self) -> &str {
        Scratchpad::name(self)
    }

    fn path(&self) -> &Path {
        Scratchpad::path(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_segments_counts_slash_separated_parts() {
        assert_eq!(Service::new("github.com", "*/*").pattern_segments(), 2);
        assert_eq!(Service::new("dev.azure.com", "*/*/*").pattern_segments(), 3);
        assert_eq!(Service::new("example.com", "*").pattern_segments(), 1);
    }

    #[test]
    fn qualified_name_joins_domain_and_full_name() {
        let repo = Repo::new(
            "github.com",
            "acme/widgets",
            PathBuf::from("/dev/github.com/acme/widgets"),
        );
        assert_eq!(repo.qualified_name(), "github.com/acme/widgets");
    }

    #[test]
    fn url_templates_render_placeholders() {
        let service = Service::new("github.com", "*/*").with_urls(
            Some("https://{domain}/{repo}".into()),
            Some("https://{domain}/{repo}.git".into()),
            Some("git@{domain}:{repo}.git".into()),
        );
        let repo = Repo::new(
            "github.com",
            "acme/widgets",
            PathBuf::from("/dev/github.com/acme/widgets"),
        );

        assert_eq!(
            service.website(&repo).as_deref(),
            Some("https://github.com/acme/widgets")
        );
        assert_eq!(
            service.http_url(&repo).as_deref(),
            Some("https://github.com/acme/widgets.git")
        );
        assert_eq!(
            service.git_url(&repo).as_deref(),
            Some("git@github.com:acme/widgets.git")
        );
    }

    #[test]
    fn url_templates_default_to_none() {
        let service = Service::new("github.com", "*/*");
        let repo = Repo::new("github.com", "acme/widgets", PathBuf::from("/dev"));
        assert!(service.website(&repo).is_none());
        assert!(service.git_url(&repo).is_none());
    }

    #[test]
    fn target_exposes_names_and_paths() {
        let repo = Repo::new("github.com", "acme/widgets", PathBuf::from("/r"));
        let scratch = Scratchpad::new("2026w35", PathBuf::from("/s"));

        let targets: Vec<&dyn Target> = vec![&repo, &scratch];
        assert_eq!(targets[0].name(), "acme/widgets");
        assert_eq!(targets[1].name(), "2026w35");
        assert_eq!(targets[1].path(), Path::new("/s"));
    }
}
