//! Homedeck configuration system.
//!
//! Loads a YAML dashboard description (window geometry plus a layout
//! tree of panel groups) and normalizes it into
//! [`schema::DashboardConfig`]. Normalization is deliberately lenient:
//! malformed layout nodes are dropped, never fatal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = homedeck_config::load_config(None).expect("failed to load config");
//! println!("{} panels", config.panel_count());
//! ```

pub mod loader;
pub mod normalize;
pub mod schema;
pub mod validation;

pub use loader::DEFAULT_CONFIG_FILE;
pub use schema::{DashboardConfig, WindowGeometry};

use std::path::Path;

use homedeck_common::ConfigError;

/// Load and validate a config.
///
/// Reads from `path` when given, otherwise `config.yml` in the working
/// directory. A layout with zero panels fails with
/// [`ConfigError::NoPanels`] so callers can surface it to the user.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    let config = match path {
        Some(p) => loader::load_from_path(p)?,
        None => loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}
