use std::fmt;

/// Type of one GPU-visible field, with its WGSL layout rules.
///
/// Host fields are plain `f32`/`u32` arrays, so the host size is always
/// `4 * components()` with 4-byte alignment. WGSL sizes and alignments follow
/// the host-shareable rules: `vec3<f32>` is 12 bytes aligned to 16, and a
/// `mat4x4<f32>` is four 16-byte columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    F32,
    U32,
    Vec2F32,
    Vec3F32,
    Vec4F32,
    Mat4x4F32,
}

impl FieldType {
    /// Number of 4-byte scalar components.
    pub const fn components(self) -> usize {
        match self {
            FieldType::F32 | FieldType::U32 => 1,
            FieldType::Vec2F32 => 2,
            FieldType::Vec3F32 => 3,
            FieldType::Vec4F32 => 4,
            FieldType::Mat4x4F32 => 16,
        }
    }

    pub const fn host_size(self) -> usize {
        4 * self.components()
    }

    pub const fn wgsl_size(self) -> usize {
        match self {
            FieldType::F32 | FieldType::U32 => 4,
            FieldType::Vec2F32 => 8,
            FieldType::Vec3F32 => 12,
            FieldType::Vec4F32 => 16,
            FieldType::Mat4x4F32 => 64,
        }
    }

    pub const fn wgsl_align(self) -> usize {
        match self {
            FieldType::F32 | FieldType::U32 => 4,
            FieldType::Vec2F32 => 8,
            FieldType::Vec3F32 | FieldType::Vec4F32 | FieldType::Mat4x4F32 => 16,
        }
    }

    /// Canonical WGSL spelling, as emitted by the generator.
    pub const fn wgsl_name(self) -> &'static str {
        match self {
            FieldType::F32 => "f32",
            FieldType::U32 => "u32",
            FieldType::Vec2F32 => "vec2<f32>",
            FieldType::Vec3F32 => "vec3<f32>",
            FieldType::Vec4F32 => "vec4<f32>",
            FieldType::Mat4x4F32 => "mat4x4<f32>",
        }
    }

    /// Parse a WGSL type name, accepting the `vec2f`-style aliases.
    pub fn from_wgsl(name: &str) -> Option<Self> {
        let compact: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "f32" => Some(FieldType::F32),
            "u32" => Some(FieldType::U32),
            "vec2<f32>" | "vec2f" => Some(FieldType::Vec2F32),
            "vec3<f32>" | "vec3f" => Some(FieldType::Vec3F32),
            "vec4<f32>" | "vec4f" => Some(FieldType::Vec4F32),
            "mat4x4<f32>" | "mat4x4f" => Some(FieldType::Mat4x4F32),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wgsl_name())
    }
}
