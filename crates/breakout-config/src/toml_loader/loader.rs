//! Core TOML config loading.

use std::path::Path;

use breakout_common::ConfigError;
use tracing::{debug, info};

use crate::schema::LayoutgenConfig;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. No validation happens here.
pub fn load_from_path(path: &Path) -> Result<LayoutgenConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: LayoutgenConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, falling back to defaults when the file is absent.
pub fn load_or_default(path: &Path) -> Result<LayoutgenConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(LayoutgenConfig::default())
        }
        Err(e) => Err(e),
    }
}
