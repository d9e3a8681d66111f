use std::mem::offset_of;

use super::colors::{Rgb, OHNO_PINK};
use super::flags::{PerQuadFlags, PER_QUAD_FLAGS_NONE};
use crate::schema::{FieldSchema, FieldType, GpuStruct, StructSchema};

/// One quad to draw, bound as an array at
/// [`BUFFER_IDX_PER_QUAD`](crate::BUFFER_IDX_PER_QUAD).
///
/// Layout: (2 + 2 + 3 + 1) × 4 = 32 bytes, 4-byte aligned. `flags` sits in
/// the tail WGSL leaves after `color: vec3<f32>`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PerQuad {
    /// Bottom-left corner in board units.
    pub pos: [f32; 2],
    /// Width and height in board units.
    pub dims: [f32; 2],
    pub color: Rgb,
    /// Raw [`PerQuadFlags`] bits.
    pub flags: u32,
}
crate::assert_gpu_layout!(PerQuad, size = 4 * (2 + 2 + 3 + 1), align = 4);
crate::assert_gpu_schema!(PerQuad);

impl GpuStruct for PerQuad {
    const SCHEMA: StructSchema = StructSchema {
        name: "PerQuad",
        fields: &[
            FieldSchema::new("pos", FieldType::Vec2F32, offset_of!(PerQuad, pos)),
            FieldSchema::new("dims", FieldType::Vec2F32, offset_of!(PerQuad, dims)),
            FieldSchema::new("color", FieldType::Vec3F32, offset_of!(PerQuad, color)),
            FieldSchema::new("flags", FieldType::U32, offset_of!(PerQuad, flags)),
        ],
    };
}

impl Default for PerQuad {
    fn default() -> Self {
        Self {
            pos: [0.0, 0.0],
            dims: [1.0, 1.0],
            color: OHNO_PINK,
            flags: PER_QUAD_FLAGS_NONE,
        }
    }
}

impl PerQuad {
    pub fn rect(pos: [f32; 2], dims: [f32; 2], color: Rgb) -> Self {
        Self {
            pos,
            dims,
            color,
            flags: PER_QUAD_FLAGS_NONE,
        }
    }

    /// An oval inscribed in the `pos`/`dims` rectangle.
    pub fn oval(pos: [f32; 2], dims: [f32; 2], color: Rgb) -> Self {
        Self::rect(pos, dims, color).with_flags(PerQuadFlags::AS_CIRCLE)
    }

    /// A ball of `radius` centered on `center`.
    pub fn ball(center: [f32; 2], radius: f32, color: Rgb) -> Self {
        Self::oval(
            [center[0] - radius, center[1] - radius],
            [2.0 * radius, 2.0 * radius],
            color,
        )
    }

    /// Replace the flags. Bits no flag defines are dropped.
    pub fn with_flags(mut self, flags: PerQuadFlags) -> Self {
        self.flags = (flags & PerQuadFlags::all()).bits();
        self
    }

    /// Flags as stored, reserved bits included.
    pub fn flags(&self) -> PerQuadFlags {
        PerQuadFlags::from_bits_retain(self.flags)
    }

    pub fn is_oval(&self) -> bool {
        self.flags().contains(PerQuadFlags::AS_CIRCLE)
    }

    pub fn has_reserved_bits(&self) -> bool {
        PerQuadFlags::reserved_bits(self.flags) != 0
    }
}
