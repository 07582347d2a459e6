//! Math types for the triangle sample
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 matrix in row-vector convention (`v' = v * M`)

mod vec3;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
