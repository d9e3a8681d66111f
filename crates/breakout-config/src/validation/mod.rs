//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::LayoutgenConfig;
use breakout_common::ConfigError;

use helpers::{validate_range, validate_wgsl_path};

/// Highest `@group` index wgpu guarantees (`max_bind_groups` defaults to 4).
pub const MAX_BIND_GROUP: u32 = 3;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LayoutgenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "generate.bind_group",
        config.generate.bind_group,
        0,
        MAX_BIND_GROUP,
    );
    validate_wgsl_path(&mut errors, "generate.out", &config.generate.out);

    for (i, shader) in config.check.shaders.iter().enumerate() {
        validate_wgsl_path(&mut errors, &format!("check.shaders[{i}]"), shader);
    }

    if config.check.shaders.contains(&config.generate.out) {
        errors.push(format!(
            "check.shaders lists the generated file {}",
            config.generate.out.display()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
