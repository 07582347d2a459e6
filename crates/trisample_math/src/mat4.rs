//! 4x4 matrix utilities
//!
//! Matrices follow the row-vector convention used by DirectX-style math
//! libraries: a point is transformed as `v' = v * M`, the translation lives in
//! row 3, and `mul(a, b)` applies `a` first, then `b`.
//!
//! Uploading a `Mat4` as-is to a WGSL `mat4x4<f32>` stores each row as a
//! column, so the shader-side `world * position` gives the same result as
//! `position * world` on the CPU.

use crate::Vec3;

/// 4x4 matrix type (row-major, row-vector convention)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a translation matrix.
///
/// # Example
/// ```
/// use trisample_math::{mat4, Vec3};
/// let m = mat4::translation(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(mat4::get_translation(m), Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Create a rotation about the Z axis.
///
/// Positive angles rotate X towards Y.
pub fn rotation_z(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m[1][1] = cs;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In row-vector convention, this applies a first, then b.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Extract the translation row
#[inline]
pub fn get_translation(m: Mat4) -> Vec3 {
    Vec3::new(m[3][0], m[3][1], m[3][2])
}
