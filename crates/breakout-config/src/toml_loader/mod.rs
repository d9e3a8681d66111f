//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_from_path, load_or_default};
pub use paths::{create_default_config, default_config_path, DEFAULT_CONFIG_FILE};
