//! Canonical field lists for GPU-visible structs.
//!
//! Each shared struct implements [`GpuStruct`] with one [`StructSchema`]: the
//! field names and types in declaration order, plus the host offset of each
//! field. The WGSL declaration is generated from this list, and the host
//! layout is pinned to the WGSL layout computed here (see
//! [`assert_gpu_schema!`](crate::assert_gpu_schema)).
//!
//! All layout arithmetic is `const fn` so it can run inside array lengths.

mod field;


pub use field::FieldType;

use breakout_common::LayoutError;

/// One field of a GPU-visible struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub ty: FieldType,
    /// Byte offset in the host `#[repr(C)]` struct, from `offset_of!`.
    pub host_offset: usize,
}

impl FieldSchema {
    pub const fn new(name: &'static str, ty: FieldType, host_offset: usize) -> Self {
        Self {
            name,
            ty,
            host_offset,
        }
    }
}

/// Ordered field list of a GPU-visible struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSchema],
}

/// A host type whose memory is uploaded verbatim into a GPU buffer.
pub trait GpuStruct: bytemuck::Pod {
    const SCHEMA: StructSchema;

    /// Runtime counterpart of [`assert_gpu_schema!`](crate::assert_gpu_schema).
    fn verify_layout() -> Result<(), LayoutError> {
        Self::SCHEMA.verify(std::mem::size_of::<Self>())
    }
}

pub(crate) const fn round_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}

impl StructSchema {
    /// Offset WGSL assigns to field `index`.
    ///
    /// Panics (at compile time when used in a const) if `index` is out of range.
    pub const fn device_offset(&self, index: usize) -> usize {
        let mut offset = 0;
        let mut i = 0;
        loop {
            let ty = self.fields[i].ty;
            offset = round_up(offset, ty.wgsl_align());
            if i == index {
                return offset;
            }
            offset += ty.wgsl_size();
            i += 1;
        }
    }

    /// Struct alignment in WGSL: the largest member alignment.
    pub const fn device_align(&self) -> usize {
        let mut align = 1;
        let mut i = 0;
        while i < self.fields.len() {
            let field_align = self.fields[i].ty.wgsl_align();
            if field_align > align {
                align = field_align;
            }
            i += 1;
        }
        align
    }

    /// Struct size in WGSL, which is also its `array<T>` stride.
    pub const fn device_size(&self) -> usize {
        if self.fields.is_empty() {
            return 0;
        }
        let last = self.fields.len() - 1;
        let end = self.device_offset(last) + self.fields[last].ty.wgsl_size();
        round_up(end, self.device_align())
    }

    /// Total scalar component count, i.e. the `2 + 2 + 3 + ...` sum.
    pub const fn host_words(&self) -> usize {
        let mut words = 0;
        let mut i = 0;
        while i < self.fields.len() {
            words += self.fields[i].ty.components();
            i += 1;
        }
        words
    }

    pub const fn offsets_match(&self) -> bool {
        let mut i = 0;
        while i < self.fields.len() {
            if self.fields[i].host_offset != self.device_offset(i) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Compare the host layout against the WGSL layout, reporting the first
    /// disagreement.
    pub fn verify(&self, host_size: usize) -> Result<(), LayoutError> {
        for (index, field) in self.fields.iter().enumerate() {
            let device = self.device_offset(index);
            if field.host_offset != device {
                return Err(LayoutError::LayoutMismatch {
                    ty: self.name.to_string(),
                    what: format!("offset of `{}`", field.name),
                    host: field.host_offset,
                    device,
                });
            }
        }

        let device = self.device_size();
        if host_size != device {
            return Err(LayoutError::LayoutMismatch {
                ty: self.name.to_string(),
                what: "size".to_string(),
                host: host_size,
                device,
            });
        }

        Ok(())
    }
}
