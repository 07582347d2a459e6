//! Core types for the triangle sample
//!
//! - [`FrameCounter`] - Monotonic tick that drives the animation
//! - [`AnimatedTransform`] - Tick pair -> world transform
//! - [`Graphics`] - Collaborator contract implemented by a rendering backend
//! - [`Bindings`] - Root signature, polygon, constant buffer and descriptor heap,
//!   reachable only after every one-time setup call succeeded
//! - [`FrameLoop`] - Per-frame sequencing until termination

mod frame_counter;
mod animation;
mod graphics;
mod bindings;
mod frame_loop;

pub use frame_counter::FrameCounter;
pub use animation::{AnimatedTransform, compose_world, TRANSLATION_PERIOD, ROTATION_PERIOD};
pub use graphics::{
    Graphics, EventPump, RootSignatureDesc, SamplerDesc, Filter, AddressMode, ShaderVisibility,
    CONSTANT_BUFFER_SLOTS,
};
pub use bindings::{Bindings, WORLD_CONSTANT_BUFFER_SLOT};
pub use frame_loop::{FrameLoop, LoopState};

// Re-export math types for convenience
pub use trisample_math::{Mat4, Vec3};
