//! Tick-driven world transform
//!
//! The animation is a function of frame ticks only, never of wall-clock time,
//! so it plays at whatever rate frames are produced.
//!
//! - Translation: `x = sin((t1 % 1000) / 1000 * 2π)`, y and z stay 0
//! - Rotation about Z: `θ = tan((t2 % 1000) / 100 * 2π)`
//! - World: `RotationZ(θ) * Translation(x, 0, 0)`
//!
//! `tan` jumps near `π/2 + kπ`, which makes the triangle snap around a few
//! times per rotation period. That is part of the animation.

use std::f64::consts::TAU;

use trisample_math::{mat4, Mat4, Vec3};

/// Ticks per full translation swing
pub const TRANSLATION_PERIOD: u64 = 1000;

/// Ticks are reduced modulo this before the rotation phase is computed
pub const ROTATION_PERIOD: u64 = 1000;

/// Divisor of the rotation phase; ten `tan` cycles fit in one rotation period
const ROTATION_PHASE_DIVISOR: f64 = 100.0;

/// Decomposed world transform for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedTransform {
    /// Translation (only X is animated)
    pub translation: Vec3,
    /// Rotation angle about the Z axis in radians
    pub rotation_z: f32,
}

impl AnimatedTransform {
    /// Build the transform from the translation tick and the rotation tick
    pub fn from_ticks(translation_tick: u64, rotation_tick: u64) -> Self {
        let phase1 = (translation_tick % TRANSLATION_PERIOD) as f64
            / TRANSLATION_PERIOD as f64
            * TAU;
        let phase2 = (rotation_tick % ROTATION_PERIOD) as f64 / ROTATION_PHASE_DIVISOR * TAU;

        Self {
            translation: Vec3::new(phase1.sin() as f32, 0.0, 0.0),
            rotation_z: phase2.tan() as f32,
        }
    }

    /// Compose `RotationZ(θ) * Translation(x, y, z)`
    pub fn to_matrix(&self) -> Mat4 {
        mat4::mul(mat4::rotation_z(self.rotation_z), mat4::translation(self.translation))
    }
}

/// World matrix for a tick pair
pub fn compose_world(translation_tick: u64, rotation_tick: u64) -> Mat4 {
    AnimatedTransform::from_ticks(translation_tick, rotation_tick).to_matrix()
}
