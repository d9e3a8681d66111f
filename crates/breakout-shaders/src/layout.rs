//! Compile-time layout gate for GPU-visible types.
//!
//! Every struct uploaded to a GPU buffer is pinned to an expected byte size
//! (and optionally an alignment) written next to its definition. The expected
//! size is spelled as `4 * (component counts...)` so the literal mirrors the
//! field list. If the two drift apart the crate stops compiling.
//!
//! Both checks are array-length comparisons, so rustc reports the two numbers
//! side by side (`expected an array with a size of 28, found one with a size
//! of 32`) instead of a bare "assertion failed".
//!
//! Matching field list and literal:
//!
//! ```
//! #[repr(C)]
//! struct PerQuad {
//!     pos: [f32; 2],
//!     dims: [f32; 2],
//!     color: [f32; 3],
//! }
//! breakout_shaders::assert_gpu_layout!(PerQuad, size = 4 * (2 + 2 + 3), align = 4);
//! ```
//!
//! A literal that disagrees with the field list is rejected:
//!
//! ```compile_fail
//! #[repr(C)]
//! struct PerQuad {
//!     pos: [f32; 2],
//!     dims: [f32; 2],
//!     color: [f32; 3],
//! }
//! breakout_shaders::assert_gpu_layout!(PerQuad, size = 4 * (2 + 2 + 4), align = 4);
//! ```
//!
//! So is an alignment that disagrees:
//!
//! ```compile_fail
//! #[repr(C, align(16))]
//! struct View {
//!     mat_view_proj: [[f32; 4]; 4],
//! }
//! breakout_shaders::assert_gpu_layout!(View, size = 4 * 16, align = 4);
//! ```
//!
//! Adding a field without touching the literal breaks the build:
//!
//! ```compile_fail
//! #[repr(C)]
//! struct PerQuad {
//!     pos: [f32; 2],
//!     dims: [f32; 2],
//!     color: [f32; 3],
//!     flags: u32,
//! }
//! breakout_shaders::assert_gpu_layout!(PerQuad, size = 4 * (2 + 2 + 3), align = 4);
//! ```
//!
//! The schema gate catches a host struct whose size matches its own literal
//! but not the WGSL rules, here a trailing `vec3<f32>` that WGSL pads to 32:
//!
//! ```compile_fail
//! use breakout_shaders::schema::{FieldSchema, FieldType, GpuStruct, StructSchema};
//! use std::mem::offset_of;
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
//! struct PerQuad {
//!     pos: [f32; 2],
//!     dims: [f32; 2],
//!     color: [f32; 3],
//! }
//!
//! impl GpuStruct for PerQuad {
//!     const SCHEMA: StructSchema = StructSchema {
//!         name: "PerQuad",
//!         fields: &[
//!             FieldSchema::new("pos", FieldType::Vec2F32, offset_of!(PerQuad, pos)),
//!             FieldSchema::new("dims", FieldType::Vec2F32, offset_of!(PerQuad, dims)),
//!             FieldSchema::new("color", FieldType::Vec3F32, offset_of!(PerQuad, color)),
//!         ],
//!     };
//! }
//!
//! breakout_shaders::assert_gpu_layout!(PerQuad, size = 4 * (2 + 2 + 3), align = 4);
//! breakout_shaders::assert_gpu_schema!(PerQuad);
//! ```

/// Fail the build unless `size_of::<T>()` (and `align_of::<T>()` when given)
/// equal the expected values.
#[macro_export]
macro_rules! assert_gpu_layout {
    ($ty:ty, size = $size:expr, align = $align:expr $(,)?) => {
        const _: [(); $size] = [(); ::core::mem::size_of::<$ty>()];
        const _: [(); $align] = [(); ::core::mem::align_of::<$ty>()];
    };
    ($ty:ty, size = $size:expr $(,)?) => {
        const _: [(); $size] = [(); ::core::mem::size_of::<$ty>()];
    };
}

/// Fail the build unless the host layout of `T` equals the WGSL layout of
/// its [`GpuStruct::SCHEMA`](crate::schema::GpuStruct::SCHEMA).
#[macro_export]
macro_rules! assert_gpu_schema {
    ($ty:ty $(,)?) => {
        const _: [(); <$ty as $crate::schema::GpuStruct>::SCHEMA.device_size()] =
            [(); ::core::mem::size_of::<$ty>()];
        const _: () = ::core::assert!(
            <$ty as $crate::schema::GpuStruct>::SCHEMA.offsets_match(),
            "host field offsets disagree with the WGSL layout"
        );
    };
}
