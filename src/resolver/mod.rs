//! resolver
//!
//! The name resolution engine.
//!
//! # Overview
//!
//! The [`Resolver`] turns short, human-typed identifiers into concrete,
//! existing repository locations under the configured directory convention:
//!
//! - `github.com/acme/widgets` - fully qualified, resolved structurally
//! - `acme/widgets` - resolved against the default service
//! - `gh/acme/wid` - fuzzy-matched against the full enumeration
//! - an alias - substituted before any other interpretation
//! - the empty string - resolved from the current working directory
//!
//! # Outcomes
//!
//! Lookups are three-state and the states are never conflated:
//!
//! - `Ok(Some(repo))` / non-empty `Ok(vec)` - found
//! - `Ok(None)` / empty `Ok(vec)` - a valid query that matched nothing,
//!   or matched ambiguously (never resolved by guessing)
//! - `Err(ResolveError)` - an operational failure (unreadable directory,
//!   invalid pattern, unavailable working directory)
//!
//! # Collaborators
//!
//! The resolver holds a reference to the loaded [`Config`] and performs
//! blocking filesystem calls directly. There is no global state and no
//! caching; every call enumerates fresh.

pub mod completer;
pub mod matcher;

pub use completer::Completer;
pub use matcher::matches;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{Config, Repo, Scratchpad, Service};

/// Top-level directory name reserved for scratchpads.
const SCRATCH_DIR_NAME: &str = "scratch";

/// Errors from resolution and enumeration operations.
///
/// These are operational failures only. "No matching repository" is not an
/// error; it is the `Ok(None)` / empty-list outcome.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The development root (or a service directory under it) could not be listed.
    #[error("unable to list directory contents in dev directory '{path}': {source}")]
    ListDirectory {
        /// The directory that could not be listed
        path: PathBuf,
        source: std::io::Error,
    },

    /// The scratchpad root could not be listed.
    #[error("unable to list directory contents in scratchpad directory '{path}': {source}")]
    ListScratchpads {
        /// The scratchpad root that could not be listed
        path: PathBuf,
        source: std::io::Error,
    },

    /// A service's directory pattern is not a valid glob.
    #[error("invalid directory pattern '{pattern}' for service '{service}': {source}")]
    InvalidPattern {
        /// Domain of the offending service
        service: String,
        /// The pattern that failed to compile
        pattern: String,
        source: glob::PatternError,
    },

    /// A globbed path could not be read during enumeration.
    #[error("unable to read directory entry for service '{service}': {source}")]
    ReadEntry {
        /// Domain of the service being enumerated
        service: String,
        source: glob::GlobError,
    },

    /// The current working directory is unavailable.
    #[error("failed to get current directory: {source}")]
    CurrentDirectory { source: std::io::Error },
}

/// Resolves names to repositories under the configured directory convention.
///
/// Construct one per resolution call site with [`Resolver::new`]; it borrows
/// the configuration and owns no other state.
pub struct Resolver<'a> {
    config: &'a Config,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the given configuration.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Resolve the repository which best matches `name`.
    ///
    /// Aliases are substituted first. A structural match from
    /// [`Resolver::resolve`] always wins; fuzzy matching against the full
    /// enumeration is fallback-only and must be unambiguous - zero or
    /// multiple fuzzy candidates yield `Ok(None)`, never a guess.
    pub fn resolve_best(&self, name: &str) -> Result<Option<Repo>, ResolveError> {
        let name = self.config.get_alias(name).unwrap_or(name);

        if let Some(repo) = self.resolve(name)? {
            return Ok(Some(repo));
        }

        let mut matched = self
            .all()?
            .into_iter()
            .filter(|r| matches(&r.qualified_name(), name));

        match (matched.next(), matched.next()) {
            (Some(repo), None) => Ok(Some(repo)),
            _ => {
                tracing::debug!(name, "no unambiguous match for repository name");
                Ok(None)
            }
        }
    }

    /// Resolve `name` structurally, without fuzzy matching.
    ///
    /// An empty name resolves from the current working directory. Otherwise
    /// the name must be fully qualified (`<domain>/<full name>`) or a full
    /// name under the default service; either way the repository directory
    /// must exist on disk.
    pub fn resolve(&self, name: &str) -> Result<Option<Repo>, ResolveError> {
        if name.is_empty() {
            return self.resolve_current_directory();
        }

        let name = normalize(name);
        let parts: Vec<&str> = name.split('/').collect();
        if parts.len() < 2 {
            tracing::debug!(name = %name, "not a fully qualified repository name");
            return Ok(None);
        }

        if let Some(service) = self.config.get_service(parts[0]) {
            return Ok(self.resolve_for_service(service, &parts[1..].join("/")));
        }

        if let Some(repo) = self.resolve_fully_qualified(&name) {
            return Ok(Some(repo));
        }

        // Fall back to the default service, treating the whole name as the
        // full name. The result only counts if it names exactly what was
        // asked for; a truncated match would silently resolve the wrong repo.
        if let Some(repo) = self.resolve_for_service(self.config.default_service(), &name) {
            if repo.full_name() == name {
                return Ok(Some(repo));
            }
            tracing::debug!(
                full_name = repo.full_name(),
                name = %name,
                "repo full name didn't match provided name"
            );
        }

        tracing::debug!(name = %name, "could not find a matching repository");
        Ok(None)
    }

    /// Enumerate every repository under the development root.
    ///
    /// Top-level entries that are not directories are skipped, as are the
    /// reserved `scratch` directory and any directory whose name does not
    /// match a configured service (the latter with a warning).
    pub fn all(&self) -> Result<Vec<Repo>, ResolveError> {
        let dev = self.config.dev_directory();
        tracing::debug!(path = %dev.display(), "searching for repositories");

        let entries = fs::read_dir(dev).map_err(|e| ResolveError::ListDirectory {
            path: dev.to_path_buf(),
            source: e,
        })?;

        let mut repos = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| ResolveError::ListDirectory {
                path: dev.to_path_buf(),
                source: e,
            })?;

            if !entry.path().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name == SCRATCH_DIR_NAME {
                continue;
            }

            match self.config.get_service(&name) {
                Some(service) => repos.extend(self.for_service(service)?),
                None => {
                    tracing::warn!(
                        service = %name,
                        "could not find a matching service entry in your configuration"
                    );
                }
            }
        }

        Ok(repos)
    }

    /// Enumerate the repositories belonging to a single service.
    ///
    /// Expands the service's directory pattern under
    /// `<dev root>/<domain>` and keeps only paths that exist as directories.
    pub fn for_service(&self, service: &Service) -> Result<Vec<Repo>, ResolveError> {
        tracing::debug!(service = service.domain(), "enumerating repositories for service");

        let root = self.config.dev_directory().join(service.domain());
        let pattern = join_segments(&root, service.pattern());
        let pattern = pattern.to_string_lossy();

        let paths = glob::glob(&pattern).map_err(|e| ResolveError::InvalidPattern {
            service: service.domain().to_string(),
            pattern: service.pattern().to_string(),
            source: e,
        })?;

        let mut repos = Vec::new();

        for path in paths {
            let path = path.map_err(|e| ResolveError::ReadEntry {
                service: service.domain().to_string(),
                source: e,
            })?;

            let full_name = match path.strip_prefix(&root) {
                Ok(rel) => relative_name(rel),
                Err(_) => continue,
            };

            tracing::debug!(
                service = service.domain(),
                path = %path.display(),
                "enumerated possible repository"
            );

            if path.is_dir() {
                repos.push(Repo::new(service.domain(), full_name, path));
            } else {
                tracing::debug!(
                    service = service.domain(),
                    path = %path.display(),
                    "marked repository as invalid"
                );
            }
        }

        Ok(repos)
    }

    /// Enumerate every scratchpad under the scratch root.
    pub fn scratchpads(&self) -> Result<Vec<Scratchpad>, ResolveError> {
        let root = self.config.scratch_directory();
        tracing::debug!(path = %root.display(), "enumerating scratchpads");

        let entries = fs::read_dir(root).map_err(|e| ResolveError::ListScratchpads {
            path: root.to_path_buf(),
            source: e,
        })?;

        let mut scratchpads = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| ResolveError::ListScratchpads {
                path: root.to_path_buf(),
                source: e,
            })?;

            if entry.path().is_dir() {
                let name = entry.file_name().to_string_lossy().into_owned();
                scratchpads.push(Scratchpad::new(name, entry.path()));
            }
        }

        Ok(scratchpads)
    }

    /// Construct a scratchpad for `name` under the scratch root.
    ///
    /// This is a pure path join; the directory is not required to exist,
    /// which supports create-on-demand flows.
    pub fn scratchpad(&self, name: &str) -> Scratchpad {
        Scratchpad::new(name, self.config.scratch_directory().join(name))
    }

    /// Resolve the repository containing the current working directory.
    ///
    /// The development root is resolved through symlinks (falling back to
    /// the configured path), then the working directory is checked to lie
    /// beneath it: a fast case-insensitive string-prefix pre-check, followed
    /// by a same-file comparison of the root portion so that symlinked roots
    /// and case-insensitive filesystems are handled correctly.
    pub fn resolve_current_directory(&self) -> Result<Option<Repo>, ResolveError> {
        let cwd =
            std::env::current_dir().map_err(|e| ResolveError::CurrentDirectory { source: e })?;

        let configured = self.config.dev_directory();
        let dev = fs::canonicalize(configured).unwrap_or_else(|_| configured.to_path_buf());

        let Some(local) = strip_dev_root(&dev, &cwd) else {
            tracing::debug!(
                path = %cwd.display(),
                devdir = %dev.display(),
                "not within the development directory"
            );
            return Ok(None);
        };

        Ok(self.resolve_fully_qualified(&local))
    }

    /// Resolve a name whose first segment identifies a service.
    fn resolve_fully_qualified(&self, name: &str) -> Option<Repo> {
        let parts: Vec<&str> = name.split('/').collect();
        if parts.len() < 2 {
            tracing::debug!(name, "not a repository folder within the development directory");
            return None;
        }

        let Some(service) = self.config.get_service(parts[0]) else {
            tracing::debug!(name, "no service found to handle repository type");
            return None;
        };

        self.resolve_for_service(service, &parts[1..].join("/"))
    }

    /// Resolve `name` as a repository managed by `service`.
    ///
    /// The first `k` segments of the name (k = the service's pattern segment
    /// count) form the full name; the repository only resolves if that
    /// directory exists under the service root.
    fn resolve_for_service(&self, service: &Service, name: &str) -> Option<Repo> {
        let parts: Vec<&str> = name.split('/').filter(|p| !p.is_empty()).collect();

        let segments = service.pattern_segments();
        if parts.len() < segments {
            tracing::debug!(
                name,
                service = service.domain(),
                "not a fully named repository folder within the service's development directory"
            );
            return None;
        }

        let full_name = parts[..segments].join("/");
        let path = join_segments(
            &self.config.dev_directory().join(service.domain()),
            &full_name,
        );

        let repo = Repo::new(service.domain(), full_name, path);
        if repo.exists() {
            Some(repo)
        } else {
            tracing::debug!(
                service = service.domain(),
                path = %repo.path().display(),
                "repository directory does not exist"
            );
            None
        }
    }
}

/// Normalize a user-supplied name: platform separators become `/` and
/// leading/trailing separators are dropped.
fn normalize(name: &str) -> String {
    name.replace('\\', "/").trim_matches('/').to_string()
}

/// Join slash-separated segments onto a root path using platform joins.
fn join_segments(root: &Path, name: &str) -> PathBuf {
    name.split('/')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |p, seg| p.join(seg))
}

/// Render a relative path as a slash-separated name.
fn relative_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// If `path` lies beneath `dev`, return its slash-separated remainder.
///
/// The cheap case-insensitive prefix comparison rules out guaranteed misses;
/// the root portion is then compared with a same-file check so that
/// case-insensitive filesystems and symlinked roots compare correctly.
fn strip_dev_root(dev: &Path, path: &Path) -> Option<String> {
    let dev_str = dev.to_string_lossy();
    let path_str = path.to_string_lossy();

    if !path_str
        .to_lowercase()
        .starts_with(&dev_str.to_lowercase())
    {
        return None;
    }

    if !path_str.is_char_boundary(dev_str.len()) {
        return None;
    }

    let root = Path::new(&path_str[..dev_str.len()]);
    match same_file(dev, root) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            tracing::debug!(
                devdir = %dev.display(),
                error = %e,
                "failed to compare development directory paths"
            );
            return None;
        }
    }

    Some(
        path_str[dev_str.len()..]
            .replace('\\', "/")
            .trim_matches('/')
            .to_string(),
    )
}

#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> std::io::Result<bool> {
    use std::os::unix::fs::MetadataExt;
    let (ma, mb) = (fs::metadata(a)?, fs::metadata(b)?);
    Ok(ma.dev() == mb.dev() && ma.ino() == mb.ino())
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> std::io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}
