//! [`Graphics`] implementation over a [`RenderContext`]

use trisample_core::{Graphics, Mat4, RootSignatureDesc};

use crate::constant_buffer::ConstantBuffer;
use crate::context::RenderContext;
use crate::descriptor_heap::DescriptorHeap;
use crate::polygon::TrianglePolygon;
use crate::root_signature::RootSignature;
use crate::RenderError;

/// Graphics engine: owns the render context and the frame clear color
pub struct GraphicsEngine {
    context: RenderContext,
    clear_color: wgpu::Color,
}

impl GraphicsEngine {
    pub fn new(context: RenderContext, clear_color: wgpu::Color) -> Self {
        Self {
            context,
            clear_color,
        }
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }
}

impl Graphics for GraphicsEngine {
    type RootSignature = RootSignature;
    type ConstantBuffer = ConstantBuffer;
    type DescriptorHeap = DescriptorHeap;
    type Polygon = TrianglePolygon;
    type Error = RenderError;

    fn create_root_signature(&mut self, desc: &RootSignatureDesc) -> Result<RootSignature, RenderError> {
        Ok(RootSignature::new(&self.context.device, desc))
    }

    fn create_polygon(&mut self, root_signature: &RootSignature) -> Result<TrianglePolygon, RenderError> {
        Ok(TrianglePolygon::new(
            &self.context.device,
            root_signature,
            self.context.config.format,
        ))
    }

    fn create_constant_buffer(&mut self, size: u64) -> Result<ConstantBuffer, RenderError> {
        Ok(ConstantBuffer::new(&self.context.device, size))
    }

    fn create_descriptor_heap(&mut self, root_signature: &RootSignature) -> DescriptorHeap {
        DescriptorHeap::new(root_signature.constant_buffer_layout().clone())
    }

    fn register_constant_buffer(&mut self, heap: &mut DescriptorHeap, slot: u32, buffer: &ConstantBuffer) {
        heap.register_constant_buffer(slot, buffer);
    }

    fn commit(&mut self, heap: &mut DescriptorHeap) -> Result<(), RenderError> {
        heap.commit(&self.context.device)
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        self.context.begin_frame(self.clear_color)
    }

    fn set_root_signature(&mut self, root_signature: &RootSignature) {
        self.context.set_root_signature(root_signature);
    }

    fn copy_to_device(&mut self, buffer: &ConstantBuffer, world: &Mat4) {
        buffer.copy_to_device(&self.context.queue, world);
    }

    fn set_descriptor_heap(&mut self, heap: &DescriptorHeap) {
        self.context.set_descriptor_heap(heap);
    }

    fn draw(&mut self, polygon: &TrianglePolygon) {
        self.context.draw(polygon);
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.context.end_frame()
    }
}
