//! Config loading: read a YAML file and normalize it.

use std::path::Path;

use serde_yaml::Value;
use tracing::info;

use homedeck_common::ConfigError;

use crate::normalize;
use crate::schema::DashboardConfig;

/// File name looked up in the working directory by [`load_default`].
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Load and normalize config from a specific YAML file path.
///
/// Parse failures are errors; malformed layout nodes inside a parseable
/// document are dropped during normalization instead.
pub fn load_from_path(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let value: Value = serde_yaml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse YAML: {e}")))?;

    let config = normalize::document(&value);
    info!(
        panels = config.panel_count(),
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Load `config.yml` from the current working directory.
pub fn load_default() -> Result<DashboardConfig, ConfigError> {
    load_from_path(Path::new(DEFAULT_CONFIG_FILE))
}
