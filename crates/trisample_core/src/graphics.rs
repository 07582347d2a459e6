//! Collaborator contract for a rendering backend
//!
//! The frame loop only sequences calls. Everything GPU-side (resource
//! creation, command recording, presentation) happens behind [`Graphics`].

use bitflags::bitflags;
use serde::{Serialize, Deserialize};
use trisample_math::Mat4;

/// Texture filtering applied to minification, magnification and mip selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Nearest texel
    Point,
    /// Trilinear
    #[default]
    Linear,
}

/// Texture coordinate addressing outside [0, 1]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressMode {
    /// Tile the texture
    #[default]
    Wrap,
    /// Tile, flipping every other repetition
    Mirror,
    /// Clamp to the edge texel
    Clamp,
}

/// Static sampler configured on the root signature
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerDesc {
    pub filter: Filter,
    pub address_u: AddressMode,
    pub address_v: AddressMode,
    pub address_w: AddressMode,
}

bitflags! {
    /// Shader stages that can see the constant buffers of a root signature
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ShaderVisibility: u8 {
        const VERTEX = 0b01;
        const FRAGMENT = 0b10;
        const ALL = Self::VERTEX.bits() | Self::FRAGMENT.bits();
    }
}

impl Default for ShaderVisibility {
    fn default() -> Self {
        ShaderVisibility::ALL
    }
}

/// Constant buffer slots in every root signature. Only b0 (the world matrix) exists.
pub const CONSTANT_BUFFER_SLOTS: u32 = 1;

/// Binding layout a draw call expects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RootSignatureDesc {
    /// Static sampler settings
    pub sampler: SamplerDesc,
    /// Stages that read the constant buffers
    pub constant_buffer_visibility: ShaderVisibility,
}

impl RootSignatureDesc {
    /// Root signature with the given sampler, visible to all stages
    pub fn with_sampler(sampler: SamplerDesc) -> Self {
        Self { sampler, ..Self::default() }
    }
}

/// Rendering backend driven by the frame loop.
///
/// One-time calls create the fixed bindings; per-frame calls are always
/// bracketed by [`Graphics::begin_frame`] and [`Graphics::end_frame`].
/// Recording outside a bracket is a programming error and implementors
/// should panic rather than ignore it.
pub trait Graphics {
    type RootSignature;
    type ConstantBuffer;
    type DescriptorHeap;
    type Polygon;
    type Error: std::error::Error + 'static;

    // One-time setup

    /// Create the root signature with its static sampler
    fn create_root_signature(
        &mut self,
        desc: &RootSignatureDesc,
    ) -> Result<Self::RootSignature, Self::Error>;

    /// Create the triangle mesh and its pipeline for a root signature
    fn create_polygon(
        &mut self,
        root_signature: &Self::RootSignature,
    ) -> Result<Self::Polygon, Self::Error>;

    /// Allocate a constant buffer of at least `size` bytes
    fn create_constant_buffer(&mut self, size: u64) -> Result<Self::ConstantBuffer, Self::Error>;

    /// Create an empty descriptor heap laid out for a root signature
    fn create_descriptor_heap(&mut self, root_signature: &Self::RootSignature) -> Self::DescriptorHeap;

    /// Register a constant buffer at a slot; takes effect on commit
    fn register_constant_buffer(
        &mut self,
        heap: &mut Self::DescriptorHeap,
        slot: u32,
        buffer: &Self::ConstantBuffer,
    );

    /// Finalize registrations so the heap can be bound
    fn commit(&mut self, heap: &mut Self::DescriptorHeap) -> Result<(), Self::Error>;

    // Per frame

    fn begin_frame(&mut self) -> Result<(), Self::Error>;

    fn set_root_signature(&mut self, root_signature: &Self::RootSignature);

    /// Upload the world matrix; visible to the next draw
    fn copy_to_device(&mut self, buffer: &Self::ConstantBuffer, world: &Mat4);

    fn set_descriptor_heap(&mut self, heap: &Self::DescriptorHeap);

    fn draw(&mut self, polygon: &Self::Polygon);

    /// Finish recording and present
    fn end_frame(&mut self) -> Result<(), Self::Error>;
}

/// Source of window/input events.
pub trait EventPump {
    /// Dispatch pending events; `false` once termination was requested
    fn poll_events(&mut self) -> bool;
}
