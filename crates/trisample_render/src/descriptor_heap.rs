//! Descriptor heap: constant buffers registered by slot, committed into a bind group

use std::sync::Arc;

use trisample_core::CONSTANT_BUFFER_SLOTS;

use crate::constant_buffer::ConstantBuffer;
use crate::RenderError;

/// Table of constant buffer views for one root signature
pub struct DescriptorHeap {
    layout: Arc<wgpu::BindGroupLayout>,
    constant_buffers: Vec<Option<Arc<wgpu::Buffer>>>,
    bind_group: Option<wgpu::BindGroup>,
}

impl DescriptorHeap {
    /// Empty heap with one entry per root signature constant buffer slot
    pub fn new(layout: Arc<wgpu::BindGroupLayout>) -> Self {
        Self {
            layout,
            constant_buffers: vec![None; CONSTANT_BUFFER_SLOTS as usize],
            bind_group: None,
        }
    }

    /// Register a constant buffer at a slot. Invalidates a previous commit.
    ///
    /// # Panics
    /// If the slot is outside the root signature's layout.
    pub fn register_constant_buffer(&mut self, slot: u32, buffer: &ConstantBuffer) {
        let capacity = self.constant_buffers.len();
        let entry = self
            .constant_buffers
            .get_mut(slot as usize)
            .unwrap_or_else(|| panic!("constant buffer slot b{} out of range (capacity {})", slot, capacity));
        *entry = Some(buffer.buffer().clone());
        self.bind_group = None;
    }

    /// Build the bind group from every registered slot
    pub fn commit(&mut self, device: &wgpu::Device) -> Result<(), RenderError> {
        let mut entries = Vec::with_capacity(self.constant_buffers.len());
        for (slot, buffer) in self.constant_buffers.iter().enumerate() {
            let buffer = buffer.as_ref().ok_or(RenderError::UnregisteredSlot(slot as u32))?;
            entries.push(wgpu::BindGroupEntry {
                binding: slot as u32,
                resource: buffer.as_entire_binding(),
            });
        }

        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Descriptor Heap"),
            layout: &self.layout,
            entries: &entries,
        }));

        Ok(())
    }

    /// Committed bind group.
    ///
    /// # Panics
    /// If the heap was never committed, or was modified after the last commit.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Descriptor heap used before commit. Call commit after registering buffers.")
    }
}
