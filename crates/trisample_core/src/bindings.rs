//! Fixed GPU bindings created once before the first frame

use trisample_math::Mat4;

use crate::graphics::{Graphics, RootSignatureDesc, CONSTANT_BUFFER_SLOTS};

/// Constant buffer slot holding the world matrix (b0)
pub const WORLD_CONSTANT_BUFFER_SLOT: u32 = 0;

// The world buffer is the only registration, so it must fill the whole layout.
const _: () = assert!(WORLD_CONSTANT_BUFFER_SLOT + 1 == CONSTANT_BUFFER_SLOTS);

/// Root signature, polygon, constant buffer and descriptor heap.
///
/// The only constructor is [`Bindings::setup`], which runs every one-time call
/// in order, so holding a `Bindings` means the frame loop can draw.
pub struct Bindings<G: Graphics> {
    root_signature: G::RootSignature,
    polygon: G::Polygon,
    constant_buffer: G::ConstantBuffer,
    descriptor_heap: G::DescriptorHeap,
}

impl<G: Graphics> Bindings<G> {
    /// Create and register every fixed binding.
    ///
    /// Order: root signature, polygon, constant buffer, descriptor heap
    /// (register world buffer at b0, then commit).
    pub fn setup(gfx: &mut G, desc: &RootSignatureDesc) -> Result<Self, G::Error> {
        let root_signature = gfx.create_root_signature(desc)?;
        log::debug!("Root signature created: {:?}", desc.sampler);

        let polygon = gfx.create_polygon(&root_signature)?;
        log::debug!("Triangle polygon created");

        let constant_buffer = gfx.create_constant_buffer(std::mem::size_of::<Mat4>() as u64)?;

        let mut descriptor_heap = gfx.create_descriptor_heap(&root_signature);
        gfx.register_constant_buffer(&mut descriptor_heap, WORLD_CONSTANT_BUFFER_SLOT, &constant_buffer);
        gfx.commit(&mut descriptor_heap)?;
        log::debug!("Descriptor heap committed");

        Ok(Self {
            root_signature,
            polygon,
            constant_buffer,
            descriptor_heap,
        })
    }

    pub fn root_signature(&self) -> &G::RootSignature {
        &self.root_signature
    }

    pub fn polygon(&self) -> &G::Polygon {
        &self.polygon
    }

    pub fn constant_buffer(&self) -> &G::ConstantBuffer {
        &self.constant_buffer
    }

    pub fn descriptor_heap(&self) -> &G::DescriptorHeap {
        &self.descriptor_heap
    }
}
