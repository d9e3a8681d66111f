//! WGSL declarations generated from the host schemas.

use std::fmt::Write;

use crate::schema::{GpuStruct, StructSchema};
use crate::{
    PerQuad, View, BUFFER_IDX_PER_QUAD, BUFFER_IDX_VIEW, PER_QUAD_FLAGS_AS_CIRCLE,
    PER_QUAD_FLAGS_NONE,
};

pub const GENERATED_HEADER: &str =
    "// Generated from the breakout-shaders schemas. Do not edit by hand.";

/// Name of the `var<uniform>` holding the [`View`].
pub const VIEW_VAR: &str = "view_uniform";
/// Name of the `var<storage>` holding the [`PerQuad`] array.
pub const PER_QUAD_VAR: &str = "per_quad";

/// Every struct shared between host and shader, in declaration order.
pub fn shared_schemas() -> [StructSchema; 2] {
    [View::SCHEMA, PerQuad::SCHEMA]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreludeOptions {
    /// `@group` the two shared buffers are bound in.
    pub bind_group: u32,
    /// Emit the `var` declarations, not only the types.
    pub include_bindings: bool,
}

impl Default for PreludeOptions {
    fn default() -> Self {
        Self {
            bind_group: 0,
            include_bindings: true,
        }
    }
}

/// `struct Name { field: type, ... };`
pub fn struct_declaration(schema: &StructSchema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "struct {} {{", schema.name);
    for field in schema.fields {
        let _ = writeln!(out, "    {}: {},", field.name, field.ty);
    }
    out.push_str("};\n");
    out
}

pub fn generate_prelude(options: &PreludeOptions) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push_str("\n\n");

    let _ = writeln!(out, "const PER_QUAD_FLAGS_NONE: u32 = {PER_QUAD_FLAGS_NONE}u;");
    let _ = writeln!(out, "const PER_QUAD_FLAGS_AS_CIRCLE: u32 = {PER_QUAD_FLAGS_AS_CIRCLE}u;");
    out.push('\n');

    let _ = writeln!(out, "const BUFFER_IDX_VIEW: u32 = {BUFFER_IDX_VIEW}u;");
    let _ = writeln!(out, "const BUFFER_IDX_PER_QUAD: u32 = {BUFFER_IDX_PER_QUAD}u;");

    for schema in shared_schemas() {
        out.push('\n');
        out.push_str(&struct_declaration(&schema));
    }

    if options.include_bindings {
        let group = options.bind_group;
        out.push('\n');
        let _ = writeln!(
            out,
            "@group({group}) @binding({BUFFER_IDX_VIEW}) var<uniform> {VIEW_VAR}: View;"
        );
        let _ = writeln!(
            out,
            "@group({group}) @binding({BUFFER_IDX_PER_QUAD}) var<storage, read> {PER_QUAD_VAR}: array<PerQuad>;"
        );
    }

    out
}
