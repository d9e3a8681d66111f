//! Tests for config validation.

use std::path::PathBuf;

use super::*;

#[test]
fn default_config_validates() {
    let config = LayoutgenConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bind_group_out_of_range() {
    let mut config = LayoutgenConfig::default();
    config.generate.bind_group = 4;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("generate.bind_group = 4"));
}

#[test]
fn catches_empty_out_path() {
    let mut config = LayoutgenConfig::default();
    config.generate.out = PathBuf::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("generate.out is empty"));
}

#[test]
fn catches_non_wgsl_shader() {
    let mut config = LayoutgenConfig::default();
    config.check.shaders = vec![PathBuf::from("shaders/quad.wgsl"), PathBuf::from("Public.h")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("check.shaders[1] = Public.h is not a .wgsl file"));
    assert!(!err.contains("check.shaders[0]"));
}

#[test]
fn catches_generated_file_in_check_list() {
    let mut config = LayoutgenConfig::default();
    config.check.shaders = vec![config.generate.out.clone()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("generated file"));
}

#[test]
fn collects_all_errors() {
    let mut config = LayoutgenConfig::default();
    config.generate.bind_group = 9;
    config.generate.out = PathBuf::from("prelude.txt");
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("generate.bind_group"));
    assert!(err.contains("generate.out"));
    assert!(err.contains("; "));
}
