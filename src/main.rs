//! Animated triangle sample
//!
//! Opens a window, binds a root signature, constant buffer and descriptor
//! heap once, then draws a triangle every frame with a tick-animated world
//! matrix until the window is closed.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use trisample::config::AppConfig;
use trisample::input::{InputAction, InputMapper};
use trisample::systems::{RenderSystem, WindowSystem};
use trisample_render::RenderError;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            render: None,
        }
    }

    /// Stop the frame loop and leave the event loop
    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(render) = &mut self.render {
            render.shutdown();
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = self.render.as_mut().filter(|r| r.is_running()) else {
            return;
        };

        match render.render_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                // Surface was reconfigured; the next redraw retries the frame
            }
            Err(e) if e.is_transient() => {
                log::warn!("Skipping frame: {}", e);
            }
            Err(e) => {
                log::error!("Fatal render error: {}", e);
                self.exit(event_loop);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(window.window().clone(), &self.config) {
            Ok(render) => self.render = Some(render),
            Err(e) => {
                log::error!("Failed to initialize rendering: {}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.exit(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => self.exit(event_loop),
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Redraw continuously
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(render) = &self.render {
            log::info!("Exiting after {} frames", render.frames());
        }
    }
}

fn main() {
    // Configuration first so it can pick the log level
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging (RUST_LOG wins over the configured level)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting {}", config.window.title);

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
