//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# breakout-layoutgen configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[generate]
# out = "shaders/generated/shared.wgsl"
# bind_group = 0             # 0-3
# include_bindings = true    # emit the view_uniform / per_quad vars

[check]
# WGSL files whose struct declarations must match the host schemas.
shaders = []
# fail_fast = false

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
