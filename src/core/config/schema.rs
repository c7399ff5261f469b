//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Location
//!
//! The config file is searched for at (in order of precedence):
//! 1. `$GROVE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/grove/config.toml`
//! 3. `~/.grove/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Values are validated after parsing: the development directory must be
//! set, at least one service must be configured, service domains must be
//! unique and patterns non-empty, and `default_service` (when present) must
//! name a configured service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Service;

/// On-disk configuration schema.
///
/// # Example
///
/// ```toml
/// directory = "~/dev"
/// scratchpads = "~/dev/scratch"
/// default_service = "github.com"
///
/// [[services]]
/// domain = "github.com"
/// pattern = "*/*"
/// website = "https://{domain}/{repo}"
///
/// [aliases]
/// gv = "github.com/grove-dev/grove"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Development root directory containing one folder per service domain
    pub directory: String,

    /// Scratchpad root; defaults to `<directory>/scratch`
    pub scratchpads: Option<String>,

    /// Domain of the service used for unqualified names; defaults to the
    /// first configured service
    pub default_service: Option<String>,

    /// Configured hosting services
    pub services: Vec<Service>,

    /// Short name to full repository name mappings
    pub aliases: BTreeMap<String, String>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "'directory' must be set to your development root".to_string(),
            ));
        }

        if self.services.is_empty() {
            return Err(ConfigError::InvalidValue(
                "at least one service must be configured".to_string(),
            ));
        }

        let mut seen = Vec::with_capacity(self.services.len());
        for service in &self.services {
            if service.domain().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "service domain cannot be empty".to_string(),
                ));
            }
            if seen.contains(&service.domain()) {
                return Err(ConfigError::InvalidValue(format!(
                    "duplicate service domain '{}'",
                    service.domain()
                )));
            }
            seen.push(service.domain());

            if service.pattern_segments() == 0 {
                return Err(ConfigError::InvalidValue(format!(
                    "service '{}' has an empty directory pattern",
                    service.domain()
                )));
            }
        }

        if let Some(domain) = &self.default_service {
            if !self.services.iter().any(|s| s.domain() == domain) {
                return Err(ConfigError::InvalidValue(format!(
                    "default_service '{}' is not a configured service",
                    domain
                )));
            }
        }

        for (alias, target) in &self.aliases {
            if alias.is_empty() || target.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "aliases must map a non-empty name to a non-empty target".to_string(),
                ));
            }
        }

        Ok(())
    }
}
