//! WGPU device, queue and surface, plus the frame currently being recorded
//!
//! Recording calls (`set_root_signature`, `set_descriptor_heap`, `draw`) are
//! only valid between [`RenderContext::begin_frame`] and
//! [`RenderContext::end_frame`].

use std::sync::Arc;
use winit::window::Window;

use crate::descriptor_heap::DescriptorHeap;
use crate::polygon::TrianglePolygon;
use crate::root_signature::{RootSignature, CONSTANT_BUFFER_GROUP, SAMPLER_GROUP};
use crate::RenderError;

/// Surface texture, encoder and open render pass for one frame
struct Frame {
    // Field order is drop order: the pass ends before its encoder goes away
    render_pass: wgpu::RenderPass<'static>,
    encoder: wgpu::CommandEncoder,
    output: wgpu::SurfaceTexture,
}

/// GPU state shared by every resource of the sample
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    frame: Option<Frame>,
}

impl RenderContext {
    /// Create a context for a window
    pub async fn with_vsync(window: Arc<Window>, vsync: bool) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Sample Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| RenderError::DeviceRequest(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::UnsupportedSurface)?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            frame: None,
        })
    }

    /// Reconfigure the surface for a new window size
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            log::debug!("Surface reconfigured to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Reconfigure with the current size (after the surface was lost)
    pub fn reconfigure(&mut self) {
        self.resize(self.size);
    }

    /// Acquire the next surface texture and open a render pass cleared to `clear_color`
    pub fn begin_frame(&mut self, clear_color: wgpu::Color) -> Result<(), RenderError> {
        assert!(self.frame.is_none(), "begin_frame called twice without end_frame");

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        self.frame = Some(Frame {
            render_pass,
            encoder,
            output,
        });
        Ok(())
    }

    /// Bind the root signature's static sampler
    pub fn set_root_signature(&mut self, root_signature: &RootSignature) {
        self.render_pass("set_root_signature")
            .set_bind_group(SAMPLER_GROUP, root_signature.sampler_bind_group(), &[]);
    }

    /// Bind the committed constant buffers
    pub fn set_descriptor_heap(&mut self, heap: &DescriptorHeap) {
        self.render_pass("set_descriptor_heap")
            .set_bind_group(CONSTANT_BUFFER_GROUP, heap.bind_group(), &[]);
    }

    pub fn draw(&mut self, polygon: &TrianglePolygon) {
        polygon.draw(self.render_pass("draw"));
    }

    /// Close the pass, submit and present
    pub fn end_frame(&mut self) -> Result<(), RenderError> {
        let Frame {
            render_pass,
            encoder,
            output,
        } = self
            .frame
            .take()
            .expect("end_frame called without begin_frame");

        // The pass must end before the encoder can finish
        drop(render_pass);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn render_pass(&mut self, what: &str) -> &mut wgpu::RenderPass<'static> {
        match self.frame.as_mut() {
            Some(frame) => &mut frame.render_pass,
            None => panic!("{} recorded outside begin_frame/end_frame", what),
        }
    }
}
