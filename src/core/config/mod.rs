//! core::config
//!
//! Configuration loading and access.
//!
//! # Overview
//!
//! Grove's configuration describes the directory convention the resolver
//! operates over: the development root, the scratchpad root, the configured
//! services with their directory patterns, an optional default service, and
//! alias mappings.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$GROVE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/grove/config.toml`
//! 3. `~/.grove/config.toml` (canonical write location)
//!
//! When no file exists a built-in default is used (`~/dev` with a single
//! `github.com` service laid out as `*/*`).
//!
//! # Example
//!
//! ```no_run
//! use grove::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("dev root: {}", config.dev_directory().display());
//! for service in config.services() {
//!     println!("{} ({})", service.domain(), service.pattern());
//! }
//! ```

pub mod schema;

pub use schema::ConfigFile;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::Service;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to serialize config: {0}")]
    SerializeError(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded, validated configuration.
///
/// Directory values have `~` expanded and are exposed as paths. Services
/// and aliases are read-only for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct Config {
    file: ConfigFile,
    dev_directory: PathBuf,
    scratch_directory: PathBuf,
    /// Path the config was loaded from, if any.
    path: Option<PathBuf>,
}

impl Config {
    /// Build a configuration directly, primarily for tests and embedding.
    ///
    /// The scratch directory defaults to `<directory>/scratch`.
    ///
    /// # Panics
    ///
    /// Panics if `services` is empty. Every configuration carries at least
    /// one service (the file-loading path enforces this through validation),
    /// and resolution of unqualified names relies on it.
    pub fn new(directory: impl Into<PathBuf>, services: Vec<Service>) -> Self {
        assert!(
            !services.is_empty(),
            "a configuration requires at least one service"
        );
        let dev_directory = directory.into();
        let scratch_directory = dev_directory.join("scratch");
        Self {
            file: ConfigFile {
                directory: dev_directory.to_string_lossy().into_owned(),
                services,
                ..Default::default()
            },
            dev_directory,
            scratch_directory,
            path: None,
        }
    }

    /// Override the scratchpad root.
    pub fn with_scratch_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.scratch_directory = path.into();
        self.file.scratchpads = Some(self.scratch_directory.to_string_lossy().into_owned());
        self
    }

    /// Set the default service by domain.
    pub fn with_default_service(mut self, domain: impl Into<String>) -> Self {
        self.file.default_service = Some(domain.into());
        self
    }

    /// Add an alias mapping.
    pub fn with_alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.file.aliases.insert(name.into(), target.into());
        self
    }

    /// Load configuration from the standard locations.
    ///
    /// `explicit` overrides the search order (used by `--config`); a missing
    /// explicit path is an error, while missing standard locations fall back
    /// to the built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var("GROVE_CONFIG") {
            return Self::from_file(Path::new(&path));
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("grove/config.toml");
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".grove/config.toml");
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config found, use the built-in default.
        Self::from_schema(ConfigFile::default_config(), None)
    }

    /// Load and validate a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_schema(file, Some(path.to_path_buf()))
    }

    fn from_schema(file: ConfigFile, path: Option<PathBuf>) -> Result<Self, ConfigError> {
        file.validate()?;

        let dev_directory = expand_tilde(&file.directory)?;
        let scratch_directory = match &file.scratchpads {
            Some(dir) => expand_tilde(dir)?,
            None => dev_directory.join("scratch"),
        };

        Ok(Self {
            file,
            dev_directory,
            scratch_directory,
            path,
        })
    }

    /// The development root directory.
    pub fn dev_directory(&self) -> &Path {
        &self.dev_directory
    }

    /// The scratchpad root directory.
    pub fn scratch_directory(&self) -> &Path {
        &self.scratch_directory
    }

    /// Path the configuration was loaded from, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All configured services, in file order.
    pub fn services(&self) -> &[Service] {
        &self.file.services
    }

    /// Look up a service by its domain.
    pub fn get_service(&self, domain: &str) -> Option<&Service> {
        self.file.services.iter().find(|s| s.domain() == domain)
    }

    /// The service used to resolve unqualified names.
    ///
    /// This is the service named by `default_service`, or the first
    /// configured service. Validation guarantees at least one service, so
    /// this never fails for a loaded config.
    pub fn default_service(&self) -> &Service {
        self.file
            .default_service
            .as_deref()
            .and_then(|domain| self.get_service(domain))
            .unwrap_or(&self.file.services[0])
    }

    /// Resolve an alias to its target full name, if configured.
    pub fn get_alias(&self, name: &str) -> Option<&str> {
        self.file.aliases.get(name).map(String::as_str)
    }

    /// Serialize the active configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&self.file).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    /// Parse and validate configuration from a TOML string.
    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })?;
        Self::from_schema(file, None)
    }
}

impl ConfigFile {
    /// The built-in default used when no config file exists.
    fn default_config() -> Self {
        ConfigFile {
            directory: "~/dev".to_string(),
            services: vec![Service::new("github.com", "*/*").with_urls(
                Some("https://{domain}/{repo}".to_string()),
                Some("https://{domain}/{repo}.git".to_string()),
                Some("git@{domain}:{repo}.git".to_string()),
            )],
            ..Default::default()
        }
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return dirs::home_dir().ok_or(ConfigError::NoHomeDir);
    }
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(path))
}
