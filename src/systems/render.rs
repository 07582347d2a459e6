//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - One-time binding setup (root signature, polygon, constant buffer, descriptor heap)
//! - Frame rendering through the frame loop

use std::sync::Arc;
use winit::window::Window;
use trisample_core::{Bindings, FrameLoop, LoopState};
use trisample_render::{GraphicsEngine, RenderContext, RenderError};
use crate::config::AppConfig;

/// Manages GPU rendering
pub struct RenderSystem {
    engine: GraphicsEngine,
    frame_loop: FrameLoop<GraphicsEngine>,
}

impl RenderSystem {
    /// Create the render context for a window and bind every fixed resource
    pub fn new(window: Arc<Window>, config: &AppConfig) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, config.window.vsync))?;
        let mut engine = GraphicsEngine::new(context, clear_color(config.rendering.background_color));

        let bindings = Bindings::setup(&mut engine, &config.root_signature_desc())?;
        log::info!("Bindings ready: {:?} sampler", config.sampler.filter);

        Ok(Self {
            engine,
            frame_loop: FrameLoop::new(bindings),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine
            .context_mut()
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Render a single frame
    ///
    /// On [`RenderError::SurfaceLost`] the surface is reconfigured before the
    /// error is returned, so the caller only needs to request another redraw.
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        match self.frame_loop.frame(&mut self.engine) {
            Ok(_) => Ok(()),
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                self.engine.context_mut().reconfigure();
                Err(RenderError::SurfaceLost)
            }
            Err(e) => Err(e),
        }
    }

    /// Stop drawing; later frames are a programming error
    pub fn shutdown(&mut self) {
        self.frame_loop.terminate();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.state() != LoopState::Terminated
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }
}

/// Convert a config RGBA array into a clear color
fn clear_color(rgba: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0] as f64,
        g: rgba[1] as f64,
        b: rgba[2] as f64,
        a: rgba[3] as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_conversion() {
        let color = clear_color([0.5, 0.25, 0.0, 1.0]);
        assert_eq!(color.r, 0.5);
        assert_eq!(color.g, 0.25);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }
}
