use std::mem::offset_of;

use crate::matrix::{self, Mat4};
use crate::schema::{FieldSchema, FieldType, GpuStruct, StructSchema};

/// Per-frame uniform data, bound at [`BUFFER_IDX_VIEW`](crate::BUFFER_IDX_VIEW).
///
/// Layout: 16 × f32 = 64 bytes, 16-byte aligned.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct View {
    /// World-to-clip transform, column-major.
    pub mat_view_proj: Mat4,
}
crate::assert_gpu_layout!(View, size = 4 * 16, align = 16);
crate::assert_gpu_schema!(View);

impl GpuStruct for View {
    const SCHEMA: StructSchema = StructSchema {
        name: "View",
        fields: &[FieldSchema::new(
            "mat_view_proj",
            FieldType::Mat4x4F32,
            offset_of!(View, mat_view_proj),
        )],
    };
}

impl Default for View {
    fn default() -> Self {
        Self {
            mat_view_proj: matrix::IDENTITY,
        }
    }
}

impl View {
    /// View of the board rectangle `[0, width] × [0, height]`, y up.
    pub fn orthographic(width: f32, height: f32) -> Self {
        Self {
            mat_view_proj: matrix::orthographic(0.0, width, 0.0, height, 0.0, 1.0),
        }
    }
}
