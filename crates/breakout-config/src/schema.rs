//! Configuration schema for `breakout-layoutgen`.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Relative paths are resolved against the working directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutgenConfig {
    pub generate: GenerateConfig,
    pub check: CheckConfig,
    pub logging: LoggingConfig,
}

/// Where and how the WGSL prelude is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub out: PathBuf,
    /// `@group` index for the shared buffers (valid range: 0-3).
    pub bind_group: u32,
    /// Emit `var` bindings in addition to the type declarations.
    pub include_bindings: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            out: PathBuf::from("shaders/generated/shared.wgsl"),
            bind_group: 0,
            include_bindings: true,
        }
    }
}

/// WGSL files checked for drift against the host schemas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub shaders: Vec<PathBuf>,
    /// Stop at the first file that drifted.
    pub fail_fast: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the workspace crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "breakout=trace",
            LogLevel::Debug => "breakout=debug",
            LogLevel::Info => "breakout=info",
            LogLevel::Warn => "breakout=warn",
            LogLevel::Error => "breakout=error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
