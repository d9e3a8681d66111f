//! WGSL side of the shared layout: generation, parsing and drift checks.

mod check;
mod generate;
mod parse;


pub use check::{check_all, check_source};
pub use generate::{
    generate_prelude, shared_schemas, struct_declaration, PreludeOptions, GENERATED_HEADER,
    PER_QUAD_VAR, VIEW_VAR,
};
pub use parse::{
    parse_bindings, parse_consts, parse_structs, WgslBinding, WgslConst, WgslField, WgslStruct,
};

/// Quad shader entry points. Declares no shared structs of its own; they come
/// from the generated prelude.
pub const QUAD_SHADER_BODY: &str = include_str!("../../shaders/quad.wgsl");

pub const VS_ENTRY_POINT: &str = "vs_instanced_quad";
pub const FS_ENTRY_POINT: &str = "fs_instanced_quad";

/// Complete quad shader: generated prelude followed by [`QUAD_SHADER_BODY`].
pub fn shader_source(options: &PreludeOptions) -> String {
    let mut source = generate_prelude(options);
    source.push('\n');
    source.push_str(QUAD_SHADER_BODY);
    source
}
