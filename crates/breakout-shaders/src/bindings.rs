//! Buffer slots and upload helpers for the quad pass.

use crate::{PerQuad, View};

/// Binding slot of the [`View`] uniform buffer.
pub const BUFFER_IDX_VIEW: u32 = 1;
/// Binding slot of the [`PerQuad`] storage buffer.
pub const BUFFER_IDX_PER_QUAD: u32 = 2;

const _: () = assert!(
    BUFFER_IDX_VIEW != BUFFER_IDX_PER_QUAD,
    "buffer indices must be distinct"
);

/// Two triangles per quad; the vertex shader indexes `per_quad` by
/// `vertex_index / VERTICES_PER_QUAD`.
pub const VERTICES_PER_QUAD: u32 = 6;

/// Vertex count of a non-indexed draw covering `quads`, or `None` if it does
/// not fit the `u32` a draw call takes.
pub fn vertex_count(quads: &[PerQuad]) -> Option<u32> {
    vertex_count_for(quads.len())
}

fn vertex_count_for(quads: usize) -> Option<u32> {
    u32::try_from(quads)
        .ok()
        .and_then(|n| n.checked_mul(VERTICES_PER_QUAD))
}

/// Layout entries for the bind group holding both shared buffers.
pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 2] {
    let visibility = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
    [
        wgpu::BindGroupLayoutEntry {
            binding: BUFFER_IDX_VIEW,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<View>() as u64),
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: BUFFER_IDX_PER_QUAD,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<PerQuad>() as u64),
            },
            count: None,
        },
    ]
}

pub fn view_bytes(view: &View) -> &[u8] {
    bytemuck::bytes_of(view)
}

pub fn quad_bytes(quads: &[PerQuad]) -> &[u8] {
    bytemuck::cast_slice(quads)
}

/// Size of a storage buffer holding `count` quads.
pub fn quad_buffer_size(count: usize) -> wgpu::BufferAddress {
    (std::mem::size_of::<PerQuad>() * count) as wgpu::BufferAddress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_indices_are_distinct_and_stable() {
        assert_eq!(BUFFER_IDX_VIEW, 1);
        assert_eq!(BUFFER_IDX_PER_QUAD, 2);
        assert_ne!(BUFFER_IDX_VIEW, BUFFER_IDX_PER_QUAD);
    }

    #[test]
    fn layout_entries_use_buffer_indices() {
        let [view, quads] = bind_group_layout_entries();
        assert_eq!(view.binding, BUFFER_IDX_VIEW);
        assert_eq!(quads.binding, BUFFER_IDX_PER_QUAD);
    }

    #[test]
    fn layout_entries_pin_min_binding_sizes() {
        let [view, quads] = bind_group_layout_entries();
        match view.ty {
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                min_binding_size,
                ..
            } => assert_eq!(min_binding_size.map(|s| s.get()), Some(64)),
            other => panic!("unexpected view binding {other:?}"),
        }
        match quads.ty {
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                min_binding_size,
                ..
            } => assert_eq!(min_binding_size.map(|s| s.get()), Some(32)),
            other => panic!("unexpected per-quad binding {other:?}"),
        }
    }

    #[test]
    fn six_vertices_per_quad() {
        let quads = [PerQuad::default(); 3];
        assert_eq!(vertex_count(&quads), Some(18));
        assert_eq!(vertex_count(&[]), Some(0));
    }

    #[test]
    fn vertex_count_refuses_to_wrap() {
        let max_quads = (u32::MAX / VERTICES_PER_QUAD) as usize;
        assert_eq!(vertex_count_for(max_quads), Some(max_quads as u32 * VERTICES_PER_QUAD));
        assert_eq!(vertex_count_for(max_quads + 1), None);
        assert_eq!(vertex_count_for(usize::MAX), None);
    }

    #[test]
    fn byte_views_match_buffer_sizes() {
        let quads = [PerQuad::default(); 5];
        assert_eq!(quad_bytes(&quads).len() as u64, quad_buffer_size(5));
        assert_eq!(view_bytes(&View::default()).len(), 64);
    }
}
