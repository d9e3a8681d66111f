pub mod errors;

pub use errors::{BreakoutError, ConfigError, LayoutError};

pub type Result<T> = std::result::Result<T, BreakoutError>;
