//! Configuration for the breakout layout generator.
//!
//! TOML-based, with defaults for every field so partial configs work out of
//! the box, and a validation pass run on every load.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LayoutgenConfig, LogLevel, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{create_default_config, default_config_path, DEFAULT_CONFIG_FILE};

use std::path::Path;

use breakout_common::ConfigError;

/// Load and validate the config at `path`, or defaults if it does not exist.
pub fn load_config(path: &Path) -> Result<LayoutgenConfig, ConfigError> {
    let config = toml_loader::load_or_default(path)?;
    validation::validate(&config)?;
    Ok(config)
}
