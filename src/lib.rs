//! Animated triangle sample
//!
//! Draws one triangle whose world matrix is animated from a frame tick,
//! bound through a root signature, a constant buffer and a descriptor heap.

pub mod config;
pub mod input;
pub mod systems;
