//! 4×4 matrix math for the view-projection transform.
//!
//! Column-major, matching WGSL `mat4x4<f32>`: `m[col][row]`.

/// 4×4 column-major matrix.
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0], // col 0
    [0.0, 1.0, 0.0, 0.0], // col 1
    [0.0, 0.0, 1.0, 0.0], // col 2
    [0.0, 0.0, 0.0, 1.0], // col 3
];

/// Orthographic projection onto wgpu clip space.
///
/// Maps `[left, right]` to x in -1..1, `[bottom, top]` to y in -1..1 and
/// `[near, far]` to depth 0..1.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = 1.0 / (right - left);
    let tb = 1.0 / (top - bottom);
    let fne = 1.0 / (far - near);

    [
        [2.0 * rl, 0.0, 0.0, 0.0],
        [0.0, 2.0 * tb, 0.0, 0.0],
        [0.0, 0.0, fne, 0.0],
        [-(right + left) * rl, -(top + bottom) * tb, -near * fne, 1.0],
    ]
}

/// Multiply two matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k][row] * b[col][k];
            }
            out[col][row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1).
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row];
    }
    out
}
