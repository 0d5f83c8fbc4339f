//! Config validation.
//!
//! The empty layout is its own condition, not a generic validation
//! failure, so the host can tell the user "no panels" instead of
//! rendering nothing silently.

use homedeck_common::ConfigError;

use crate::schema::DashboardConfig;

/// Validate a normalized config.
pub fn validate(config: &DashboardConfig) -> Result<(), ConfigError> {
    if config.panel_count() == 0 {
        return Err(ConfigError::NoPanels);
    }

    let mut errors: Vec<String> = Vec::new();

    if config.window.width <= 0.0 {
        errors.push(format!(
            "width must be positive, got {}",
            config.window.width
        ));
    }
    if config.window.height <= 0.0 {
        errors.push(format!(
            "height must be positive, got {}",
            config.window.height
        ));
    }
    if config.chrome_overhead < 0.0 {
        errors.push(format!(
            "chrome-overhead must not be negative, got {}",
            config.chrome_overhead
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
