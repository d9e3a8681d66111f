//! Structs shared between the breakout host code and its WGSL quad shader.
//!
//! [`View`] is the per-frame uniform and [`PerQuad`] the per-instance record.
//! Each one is pinned twice at compile time: to an expected byte size written
//! next to its field list ([`assert_gpu_layout!`]), and to the WGSL layout of
//! its [`schema`] ([`assert_gpu_schema!`]). The WGSL declarations themselves
//! are generated from the same schemas by [`wgsl::generate_prelude`], so the
//! shader never carries a second hand-written copy.

pub mod bindings;
pub mod layout;
pub mod matrix;
pub mod schema;
pub mod types;
pub mod wgsl;

pub use bindings::{BUFFER_IDX_PER_QUAD, BUFFER_IDX_VIEW, VERTICES_PER_QUAD};
pub use schema::{FieldType, GpuStruct, StructSchema};
pub use types::{PerQuad, PerQuadFlags, View, PER_QUAD_FLAGS_AS_CIRCLE, PER_QUAD_FLAGS_NONE};
