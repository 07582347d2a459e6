//! Constant buffer backed by a uniform buffer

use std::sync::Arc;

/// Constant buffers are allocated in multiples of this many bytes
pub const CONSTANT_BUFFER_ALIGNMENT: u64 = 256;

/// Round a requested size up to the constant buffer alignment
pub fn aligned_size(size: u64) -> u64 {
    size.max(1).div_ceil(CONSTANT_BUFFER_ALIGNMENT) * CONSTANT_BUFFER_ALIGNMENT
}

/// Uniform buffer written from the CPU every frame
pub struct ConstantBuffer {
    buffer: Arc<wgpu::Buffer>,
    /// Size requested by the caller
    size: u64,
}

impl ConstantBuffer {
    /// Allocate a constant buffer holding at least `size` bytes
    pub fn new(device: &wgpu::Device, size: u64) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Constant Buffer"),
            size: aligned_size(size),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer: Arc::new(buffer),
            size,
        }
    }

    /// Queue an upload; it lands before any command submitted afterwards.
    ///
    /// # Panics
    /// If `data` is larger than the size this buffer was created with.
    pub fn copy_to_device<T: bytemuck::Pod>(&self, queue: &wgpu::Queue, data: &T) {
        let bytes = bytemuck::bytes_of(data);
        assert!(
            bytes.len() as u64 <= self.size,
            "upload of {} bytes exceeds constant buffer size {}",
            bytes.len(),
            self.size
        );
        queue.write_buffer(&self.buffer, 0, bytes);
    }

    pub fn buffer(&self) -> &Arc<wgpu::Buffer> {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_size() {
        assert_eq!(aligned_size(64), 256);
        assert_eq!(aligned_size(256), 256);
        assert_eq!(aligned_size(257), 512);
        assert_eq!(aligned_size(0), 256);
    }

    #[test]
    fn test_world_matrix_fits_one_block() {
        let size = std::mem::size_of::<trisample_core::Mat4>() as u64;
        assert_eq!(size, 64);
        assert_eq!(aligned_size(size), CONSTANT_BUFFER_ALIGNMENT);
    }
}
