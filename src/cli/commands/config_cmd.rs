//! config command - Print the active configuration

use anyhow::Result;

use crate::core::Config;

/// Render the loaded configuration as TOML.
pub fn config(config: &Config) -> Result<()> {
    if let Some(path) = config.path() {
        tracing::debug!(path = %path.display(), "configuration loaded from file");
    }
    print!("{}", config.to_toml_string()?);
    Ok(())
}
