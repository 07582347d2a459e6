//! wgpu backend for the triangle sample
//!
//! Each engine-side object of the sample maps onto a wgpu counterpart:
//!
//! - [`root_signature::RootSignature`] - pipeline layout plus a static sampler group
//! - [`constant_buffer::ConstantBuffer`] - 256-byte aligned uniform buffer
//! - [`descriptor_heap::DescriptorHeap`] - bind group of registered constant buffers
//! - [`polygon::TrianglePolygon`] - render pipeline and a three-vertex mesh
//! - [`context::RenderContext`] - device, queue, surface and the frame being recorded
//! - [`engine::GraphicsEngine`] - implements [`trisample_core::Graphics`] on top of the above

pub mod context;
pub mod root_signature;
pub mod constant_buffer;
pub mod descriptor_heap;
pub mod polygon;
pub mod engine;
mod error;

pub use context::RenderContext;
pub use engine::GraphicsEngine;
pub use error::RenderError;
